use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# methodmetrics configuration

[naming]
# Method names must match this pattern as a whole
pattern = "^[a-z]+([A-Z][a-z0-9]+)+"

[ranking]
# Number of most complex methods reported per file
top_k = 3

[analysis]
parallel = true

[ignore]
patterns = [
    "target/**",
    "build/**",
    "out/**",
]

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
