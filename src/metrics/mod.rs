//! Per-file metrics assembly.
//!
//! Combines the naming check, complexity scoring and top-K ranking of one
//! file's methods into a [`FileReport`]. No I/O and no shared state.

use std::path::Path;

use crate::complexity::score_method;
use crate::core::{FileReport, MethodNode};
use crate::naming::{check_names, NamingRule};
use crate::ranking::{TopKTracker, DEFAULT_TOP_K};

/// Options for a single run, fixed for all files of that run.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// Defaults to lower camel case.
    pub naming_rule: NamingRule,
    /// Defaults to 3.
    pub top_k: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            naming_rule: NamingRule::lower_camel_case(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

pub fn assemble_report(path: &Path, methods: &[MethodNode], options: &AnalysisOptions) -> FileReport {
    let naming = check_names(methods.iter().map(|m| m.name.as_str()), &options.naming_rule);

    let mut tracker = TopKTracker::new(options.top_k);
    for method in methods {
        tracker.offer(score_method(method));
    }

    FileReport {
        file_name: display_name(path),
        path: path.to_path_buf(),
        method_count: methods.len(),
        incorrect_name_percentage: naming.incorrect_percentage(),
        non_conforming_names: naming.non_conforming,
        top_methods: tracker.finish(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
