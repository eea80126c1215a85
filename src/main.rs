use anyhow::Result;
use clap::Parser;
use methodmetrics::cli::{Cli, Commands};
use methodmetrics::commands::{self, AnalyzeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            top,
            pattern,
            no_parallel,
            verbosity,
            plain,
        } => {
            init_logging(verbosity);
            commands::handle_analyze(AnalyzeConfig {
                path,
                format: format.map(Into::into),
                output,
                config_file: config,
                top,
                pattern,
                no_parallel,
                verbosity,
                plain,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}

// Logs go to stderr so stdout only carries the report
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env("METHODMETRICS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 | 1 => "warn",
        2 => "debug",
        _ => "trace",
    }
}
