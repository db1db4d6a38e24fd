pub mod config;
pub mod paths;

pub use config::{CollectionDefaults, Config, LoggingConfig, OutputConfig, OUTPUT_FORMATS};
pub use paths::PathManager;
