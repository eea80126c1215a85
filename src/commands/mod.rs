//! CLI command implementations.
//!
//! - **analyze**: report naming and complexity metrics for a file or tree
//! - **init**: write a default configuration file

pub mod analyze;
pub mod init;

pub use analyze::{analyze_file, analyze_project, handle_analyze, AnalyzeConfig};
pub use init::init_config;
