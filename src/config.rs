//! Configuration file handling for ascii-cam.
//!
//! Loads configuration from `<config dir>/ascii-cam/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure.
///
/// Every field is optional; anything left out falls back to the CLI value
/// or the built-in default.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub device: Option<u32>,
    pub mirror: Option<bool>,
    pub fps: Option<u32>,
    /// `WIDTHxHEIGHT`
    pub resolution: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub color: Option<bool>,
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-cam configuration

[camera]
# Camera device index (see `ascii-cam list-cameras`)
device = 0
# Flip the picture horizontally so it reads like a mirror
mirror = true
# Requested frame rate
fps = 30
# Requested capture resolution (lower = faster)
resolution = "640x480"

[render]
# Character columns
width = 120
# Truecolor output
color = false
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::Parse { path, source: e })
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}' in config file: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-cam").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-cam/config.toml")
        })
}
