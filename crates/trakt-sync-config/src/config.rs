use crate::paths::PathManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trakt_sync_models::{Audio, AudioChannels, CollectionId, Hdr, MediaType, Resolution};

/// Output formats accepted in `[output] format`
pub const OUTPUT_FORMATS: &[&str] = &["human", "json", "json-pretty"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub collection: CollectionDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Used when `--output` is not given on the command line
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

fn default_output_format() -> String {
    "json-pretty".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Write logs to a file (rotated daily) instead of stderr
    #[serde(default, skip_serializing_if = "is_false")]
    pub to_file: bool,
    /// Log file to use; defaults to `logs/traktsync.log` next to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl LoggingConfig {
    /// The file logs go to, if any. An explicit `file` implies `to_file`.
    pub fn log_file(&self, paths: &PathManager) -> Option<PathBuf> {
        match self.file {
            Some(ref file) => Some(file.clone()),
            None if self.to_file => Some(paths.default_log_file()),
            None => None,
        }
    }
}

/// Classification applied to collection entries when the command line leaves a field out.
///
/// Handy for libraries that are mostly one format, e.g. all 4K Blu-ray rips.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdr: Option<Hdr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_channels: Option<AudioChannels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_3d: Option<bool>,
}

impl CollectionDefaults {
    /// Fill the unset classification fields of `item` from these defaults.
    /// Fields already set on `item` are kept.
    pub fn apply(&self, mut item: CollectionId) -> CollectionId {
        item.media_type = item.media_type.or(self.media_type);
        item.resolution = item.resolution.or(self.resolution);
        item.hdr = item.hdr.or(self.hdr);
        item.audio = item.audio.or(self.audio);
        item.audio_channels = item.audio_channels.or(self.audio_channels);
        item.is_3d = item.is_3d.or(self.is_3d);
        item
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config at `path`, or defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid output format '{}'. Use one of: {}",
                self.output.format,
                OUTPUT_FORMATS.join(", ")
            ));
        }

        if let Some(ref file) = self.logging.file {
            if file.file_name().is_none() {
                return Err(anyhow::anyhow!(
                    "Log file path '{}' does not name a file",
                    file.display()
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            output: OutputConfig {
                format: "json".to_string(),
            },
            logging: LoggingConfig {
                to_file: true,
                file: Some(PathBuf::from("/var/log/traktsync/traktsync.log")),
            },
            collection: CollectionDefaults {
                media_type: Some(MediaType::Bluray),
                audio_channels: Some(AudioChannels::Surround51),
                ..CollectionDefaults::default()
            },
        };

        config.save_to_file(file.path()).unwrap();

        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_parses_wire_spellings() {
        let config: Config = toml::from_str(
            r#"
            [collection]
            media_type = "bluray"
            resolution = "uhd_4k"
            hdr = "dolby_vision"
            audio = "dolby_truehd"
            audio_channels = "7.1"
            is_3d = false
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, "json-pretty");
        assert_eq!(config.collection.resolution, Some(Resolution::Uhd4k));
        assert_eq!(config.collection.audio_channels, Some(AudioChannels::Surround71));
        assert_eq!(config.collection.is_3d, Some(false));
    }

    #[test]
    fn test_config_rejects_unknown_classification() {
        let result: Result<Config, _> = toml::from_str("[collection]\nresolution = \"8k\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.output.format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.output.format = "human".to_string();
        config.logging.file = Some(PathBuf::from("/"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_file_resolution() {
        let paths = PathManager::from_base(PathBuf::from("/srv/traktsync"));

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.log_file(&paths), None);

        let config: Config = toml::from_str("[logging]\nto_file = true\n").unwrap();
        assert_eq!(
            config.logging.log_file(&paths),
            Some(PathBuf::from("/srv/traktsync/logs/traktsync.log"))
        );

        let config: Config = toml::from_str("[logging]\nfile = \"/tmp/ts.log\"\n").unwrap();
        assert_eq!(config.logging.log_file(&paths), Some(PathBuf::from("/tmp/ts.log")));
    }

    #[test]
    fn test_collection_defaults_fill_only_unset_fields() {
        let defaults = CollectionDefaults {
            media_type: Some(MediaType::Bluray),
            resolution: Some(Resolution::Hd1080p),
            is_3d: Some(false),
            ..CollectionDefaults::default()
        };
        let collected_at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let item = CollectionId::new(28, collected_at).with_resolution(Resolution::Uhd4k);

        let item = defaults.apply(item);
        assert_eq!(item.media_type, Some(MediaType::Bluray));
        assert_eq!(item.resolution, Some(Resolution::Uhd4k));
        assert_eq!(item.hdr, None);
        assert_eq!(item.is_3d, Some(false));
    }
}
