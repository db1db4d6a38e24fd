use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "TRAKTSYNC_CONFIG_DIR";

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("traktsync");

        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base_dir: PathBuf) -> Self {
        Self {
            log_dir: base_dir.join("logs"),
            config_dir: base_dir,
        }
    }

    /// Paths rooted at the directory holding `config_file`
    pub fn for_config_file(config_file: &Path) -> Self {
        let base_dir = config_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::from_base(base_dir.to_path_buf())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.log_dir.join("traktsync.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Self::from_base(PathBuf::from(dir));
        }

        // Platform config dir (e.g. ~/.config/traktsync on Linux), else the working directory
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".traktsync")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths_from_base() {
        let paths = PathManager::from_base(PathBuf::from("/srv/traktsync"));
        assert_eq!(paths.config_file(), PathBuf::from("/srv/traktsync/config.toml"));
        assert_eq!(paths.default_log_file(), PathBuf::from("/srv/traktsync/logs/traktsync.log"));
    }

    #[test]
    fn test_paths_for_config_file() {
        let paths = PathManager::for_config_file(Path::new("/etc/traktsync/custom.toml"));
        assert_eq!(paths.config_dir(), Path::new("/etc/traktsync"));
        assert_eq!(paths.default_log_file(), PathBuf::from("/etc/traktsync/logs/traktsync.log"));

        let paths = PathManager::for_config_file(Path::new("custom.toml"));
        assert_eq!(paths.config_dir(), Path::new("."));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempdir().unwrap();
        let paths = PathManager::from_base(dir.path().join("traktsync"));
        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }
}
