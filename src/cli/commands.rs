//! Subcommand handlers for list-cameras and config actions.

use std::io::Write;
use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::app::AppError;
use crate::camera;
use crate::config::{Config, DEFAULT_CONFIG};

/// List available cameras and print them to `out`.
pub fn list_cameras(out: &mut impl Write) -> Result<(), AppError> {
    let devices = camera::list_devices()?;
    if devices.is_empty() {
        writeln!(out, "No cameras found.")?;
        writeln!(out)?;
        writeln!(
            out,
            "Make sure your camera is connected and permissions are granted."
        )?;
    } else {
        writeln!(out, "Available cameras:")?;
        for device in devices {
            writeln!(out, "  {}", device)?;
        }
        writeln!(out)?;
        writeln!(out, "Use --camera <index> to select a camera.")?;
    }
    Ok(())
}

/// Handle config subcommand actions against the file at `path`.
pub fn handle_config_action(
    action: ConfigAction,
    args: &Args,
    path: &Path,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(path))?;
            let settings = args.settings(&config)?;

            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Camera: {}", settings.camera.device_index)?;
            writeln!(out, "  Resolution: {}", settings.camera.resolution)?;
            writeln!(out, "  FPS: {}", settings.camera.fps)?;
            writeln!(
                out,
                "  Mirror: {}",
                if settings.camera.mirror { "yes" } else { "no" }
            )?;
            writeln!(out, "  Width: {}", settings.width)?;
            writeln!(out, "  Mode: {}", settings.mode)?;
            writeln!(out)?;

            if path.exists() {
                writeln!(out, "Config file: {} (exists)", path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", path.display())?;
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                writeln!(out, "Config file already exists: {}", path.display())?;
                writeln!(out, "Use 'ascii-cam config show' to view current settings.")?;
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG)?;
            log::info!("wrote default config to {}", path.display());

            writeln!(out, "Created config file: {}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_init_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let args = Args::parse_from(["ascii-cam", "-c"]);

        let mut out = Vec::new();
        handle_config_action(ConfigAction::Init, &args, &path, &mut out).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(String::from_utf8(out).unwrap().contains("Created config file"));

        let mut out = Vec::new();
        handle_config_action(ConfigAction::Show, &args, &path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Width: 120"));
        assert!(text.contains("Mode: RGB Color"));
        assert!(text.contains("(exists)"));
    }

    #[test]
    fn test_config_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nwidth = 42\n").unwrap();
        let args = Args::parse_from(["ascii-cam"]);

        let mut out = Vec::new();
        handle_config_action(ConfigAction::Init, &args, &path, &mut out).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[render]\nwidth = 42\n"
        );
        assert!(String::from_utf8(out).unwrap().contains("already exists"));
    }

    #[test]
    fn test_config_show_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let args = Args::parse_from(["ascii-cam"]);

        let mut out = Vec::new();
        handle_config_action(ConfigAction::Show, &args, &path, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("(not found)"));
    }
}
