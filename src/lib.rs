// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod io;
pub mod metrics;
pub mod naming;
pub mod ranking;

// Re-export commonly used types
pub use crate::core::{
    Error, FileReport, Language, MethodNode, MethodScore, ProjectReport, RankedMethods, Result,
    SkippedFile, StatementKind, StatementNode, TopKList,
};

pub use crate::analyzers::{analyze_source, get_analyzer, java::JavaAnalyzer, Analyzer};
pub use crate::commands::{analyze_file, analyze_project};
pub use crate::complexity::{calculate_complexity, count_statements, score_method, score_methods};
pub use crate::config::MetricsConfig;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::metrics::{assemble_report, AnalysisOptions};
pub use crate::naming::{check_names, incorrect_name_percentage, NamingCheck, NamingRule};
pub use crate::ranking::{rank_methods, TopKTracker, DEFAULT_TOP_K};
