use crate::output::Output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::path::Path;
use trakt_sync_config::{Config, PathManager};

/// Print the effective configuration as TOML
pub fn run_show(config: &Config, path: &Path, output: &Output) -> Result<()> {
    let content = toml::to_string_pretty(config).wrap_err("Failed to render configuration")?;
    if path.exists() {
        output.info(format!("Configuration from {}", path.display()));
    } else {
        output.info(format!("No file at {}; showing defaults", path.display()));
    }
    println!("{}", content);
    Ok(())
}

/// Write a default config file, creating the config and log directories
pub fn run_init(path: &Path, paths: &PathManager, force: bool, output: &Output) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        ));
    }

    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", paths.config_dir().display(), e))?;

    Config::default()
        .save_to_file(path)
        .map_err(|e| eyre!("Failed to write {}: {}", path.display(), e))?;
    output.success(format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

pub fn run_path(path: &Path) {
    println!("{}", path.display());
}
