use crate::analyzers::{analyze_source, get_analyzer};
use crate::config::{self, MetricsConfig};
use crate::core::{FileReport, Language, ProjectReport, Result, SkippedFile};
use crate::io::{
    self,
    output::{create_writer, OutputFormat},
    walker::find_project_files,
};
use crate::metrics::AnalysisOptions;
use anyhow::Context;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, info, warn};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub top: Option<usize>,
    pub pattern: Option<String>,
    pub no_parallel: bool,
    pub verbosity: u8,
    pub plain: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    let metrics_config = resolve_config(&config)?;
    let report = analyze_project(&config.path, &metrics_config)
        .with_context(|| format!("Failed to analyze {}", config.path.display()))?;

    let format = config
        .format
        .or_else(|| metrics_config.default_format().and_then(OutputFormat::from_name))
        .unwrap_or(OutputFormat::Terminal);
    configure_color(&config, &metrics_config, format);

    let sink: Box<dyn std::io::Write> = match &config.output {
        Some(path) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(format, sink, config.verbosity > 0);
    writer.write_report(&report)?;
    Ok(())
}

/// Config file (explicit or discovered) with command-line overrides applied.
fn resolve_config(config: &AnalyzeConfig) -> anyhow::Result<MetricsConfig> {
    let mut metrics_config = match &config.config_file {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load_config(),
    };

    if let Some(top) = config.top {
        metrics_config = metrics_config.with_top_k(top);
    }
    if let Some(pattern) = &config.pattern {
        metrics_config = metrics_config.with_naming_pattern(pattern.clone());
    }
    if config.no_parallel {
        metrics_config = metrics_config.with_parallel(false);
    }

    metrics_config.validate()?;
    Ok(metrics_config)
}

fn configure_color(config: &AnalyzeConfig, metrics_config: &MetricsConfig, format: OutputFormat) {
    let use_color = !config.plain
        && config.output.is_none()
        && format == OutputFormat::Terminal
        && metrics_config.use_color().unwrap_or(true)
        && std::env::var_os("NO_COLOR").is_none();
    if !use_color {
        colored::control::set_override(false);
    }
}

/// Analyzes every supported file under `root`.
///
/// Files that cannot be read or parsed are recorded as skipped and the run
/// carries on with the rest.
pub fn analyze_project(root: &Path, config: &MetricsConfig) -> Result<ProjectReport> {
    let options = config.analysis_options()?;
    let files = find_project_files(root, &config.get_ignore_patterns())?;
    info!(root = %root.display(), files = files.len(), "Analyzing project");

    let outcomes: Vec<(PathBuf, Result<FileReport>)> = if config.parallel() {
        files
            .par_iter()
            .map(|path| (path.clone(), analyze_file(path, &options)))
            .collect()
    } else {
        files
            .iter()
            .map(|path| (path.clone(), analyze_file(path, &options)))
            .collect()
    };

    let mut report = ProjectReport {
        root: root.to_path_buf(),
        ..ProjectReport::default()
    };
    for (path, outcome) in outcomes {
        match outcome {
            Ok(file_report) => report.files.push(file_report),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping file");
                report.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<FileReport> {
    let _span = debug_span!("analyze_file", file = %path.display()).entered();
    let content = io::read_file(path)?;
    let analyzer = get_analyzer(Language::from_path(path));
    let report = analyze_source(&content, path, analyzer.as_ref(), options)?;
    debug!(
        methods = report.method_count,
        incorrect = report.incorrect_name_percentage,
        "Analyzed file"
    );
    Ok(report)
}
