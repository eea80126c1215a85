mod core;
mod loader;

pub use self::core::{
    AnalysisConfig, IgnoreConfig, MetricsConfig, NamingConfig, OutputConfig, RankingConfig,
};

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from_dir,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
