use crate::core::{Error, FileReport, Language, MethodNode, Result};
use crate::metrics::{assemble_report, AnalysisOptions};
use std::path::Path;

pub mod java;

/// Turns source text into the method declarations the metrics work on.
pub trait Analyzer: Send + Sync {
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<MethodNode>>;
    fn language(&self) -> Language;
}

pub fn analyze_source(
    content: &str,
    path: &Path,
    analyzer: &dyn Analyzer,
    options: &AnalysisOptions,
) -> Result<FileReport> {
    analyzer
        .parse(content, path)
        .map(|methods| assemble_report(path, &methods, options))
}

pub fn get_analyzer(language: Language) -> Box<dyn Analyzer> {
    type AnalyzerFactory = fn() -> Box<dyn Analyzer>;

    static ANALYZER_MAP: &[(Language, AnalyzerFactory)] =
        &[(Language::Java, || Box::new(java::JavaAnalyzer::new()))];

    ANALYZER_MAP
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, factory)| factory())
        .unwrap_or_else(|| Box::new(NullAnalyzer))
}

struct NullAnalyzer;

impl Analyzer for NullAnalyzer {
    fn parse(&self, _content: &str, path: &Path) -> Result<Vec<MethodNode>> {
        Err(Error::Unsupported(format!(
            "no analyzer for {}",
            path.display()
        )))
    }

    fn language(&self) -> Language {
        Language::Unknown
    }
}
