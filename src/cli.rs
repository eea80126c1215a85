use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "methodmetrics")]
#[command(about = "Method naming and complexity metrics for Java sources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report naming and complexity metrics for a file or directory
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Output format (defaults to the config file setting, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .methodmetrics.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of most complex methods to report per file
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Naming pattern method names must match as a whole
        #[arg(long = "pattern", env = "METHODMETRICS_PATTERN")]
        pattern: Option<String>,

        /// Analyze files one at a time
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        /// -v: List non-conforming names
        /// -vv: Debug logging
        /// -vvv: Trace logging
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Disable colored output
        #[arg(long = "plain")]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_overrides() {
        let cli = Cli::try_parse_from([
            "methodmetrics",
            "analyze",
            "src",
            "--format",
            "json",
            "--top",
            "5",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                path,
                format,
                top,
                verbosity,
                ..
            } => {
                assert_eq!(path, PathBuf::from("src"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(top, Some(5));
                assert_eq!(verbosity, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["methodmetrics", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
