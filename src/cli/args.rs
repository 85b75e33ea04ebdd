//! CLI argument parsing with clap.

use clap::{value_parser, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::{Settings, DEFAULT_WIDTH};
use crate::ascii::ColorMode;
use crate::camera::{CameraSettings, Resolution};
use crate::config::{Config, ConfigError};

/// Live webcam rendered as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-cam")]
#[command(version, about = "Live webcam rendered as ASCII art in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Grayscale, 120 columns
    ascii-cam

    # Truecolor, 80 columns
    ascii-cam --color --width 80

    # List available cameras
    ascii-cam list-cameras")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable RGB colored ASCII
    #[arg(short, long)]
    pub color: bool,

    /// ASCII width in characters [default: 120]
    #[arg(short, long, value_parser = value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Camera device index (from list-cameras) [default: 0]
    #[arg(long)]
    pub camera: Option<u32>,

    /// Capture resolution as WIDTHxHEIGHT [default: 640x480]
    #[arg(long)]
    pub resolution: Option<Resolution>,

    /// Requested capture frame rate [default: 30]
    #[arg(long, value_parser = value_parser!(u32).range(1..=120))]
    pub fps: Option<u32>,

    /// Show the picture as the camera sees it instead of mirrored
    #[arg(long)]
    pub no_mirror: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective settings
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Merge flags with the config file.
    ///
    /// Flags given on the command line win, then values from the file, then
    /// built-in defaults. `--color` turns colour on even if the file has it
    /// off.
    pub fn settings(&self, config: &Config) -> Result<Settings, ConfigError> {
        let defaults = CameraSettings::default();

        let file_resolution = config
            .camera
            .resolution
            .as_deref()
            .map(|s| {
                s.parse::<Resolution>().map_err(|message| ConfigError::Invalid {
                    key: "camera.resolution",
                    message,
                })
            })
            .transpose()?;

        if config.render.width == Some(0) {
            return Err(ConfigError::Invalid {
                key: "render.width",
                message: "width must be at least 1".to_string(),
            });
        }
        if config.camera.fps == Some(0) {
            return Err(ConfigError::Invalid {
                key: "camera.fps",
                message: "fps must be at least 1".to_string(),
            });
        }

        let camera = CameraSettings {
            device_index: self
                .camera
                .or(config.camera.device)
                .unwrap_or(defaults.device_index),
            resolution: self
                .resolution
                .or(file_resolution)
                .unwrap_or(defaults.resolution),
            fps: self.fps.or(config.camera.fps).unwrap_or(defaults.fps),
            mirror: !self.no_mirror && config.camera.mirror.unwrap_or(defaults.mirror),
        };

        Ok(Settings {
            camera,
            width: self
                .width
                .or(config.render.width)
                .unwrap_or(DEFAULT_WIDTH),
            mode: ColorMode::from_flag(self.color || config.render.color.unwrap_or(false)),
        })
    }
}
