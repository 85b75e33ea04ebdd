//! The capture → convert → render loop and the session around it.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::ascii::{AsciiConverter, ColorMode};
use crate::camera::{CameraError, CameraSettings, FrameSource, Resolution};
use crate::config::ConfigError;
use crate::renderer::Renderer;

/// Default number of character columns.
pub const DEFAULT_WIDTH: u32 = 120;

/// Top-level error for a session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Everything a session needs once CLI flags and the config file are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub camera: CameraSettings,
    pub width: u32,
    pub mode: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            width: DEFAULT_WIDTH,
            mode: ColorMode::Grayscale,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug)]
pub enum LoopExit {
    /// The stop flag was raised (Ctrl+C).
    Interrupted,
    /// The source failed to deliver a frame.
    ReadFailed(CameraError),
}

/// Result of a finished loop.
#[derive(Debug)]
pub struct RunSummary {
    /// Frames rendered before the loop ended.
    pub frames: u64,
    pub exit: LoopExit,
}

impl RunSummary {
    pub fn interrupted(&self) -> bool {
        matches!(self.exit, LoopExit::Interrupted)
    }
}

/// Install a Ctrl+C handler that raises the returned flag.
///
/// Call once at program startup.
pub fn install_stop_handler() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })?;
    Ok(stop)
}

/// Pull frames from `source` and render them until `stop` is raised or a
/// read fails.
///
/// The stop flag is checked before each read and again before rendering,
/// so a frame that arrives after Ctrl+C is dropped. Terminal write errors
/// end the loop with `Err`.
pub fn run_loop<S, W>(
    source: &mut S,
    converter: &mut AsciiConverter,
    renderer: &mut Renderer<W>,
    stop: &AtomicBool,
) -> Result<RunSummary, AppError>
where
    S: FrameSource + ?Sized,
    W: Write,
{
    let mut frame_count: u64 = 0;

    let exit = loop {
        if stop.load(Ordering::SeqCst) {
            break LoopExit::Interrupted;
        }

        let frame = match source.read_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("{} stopped delivering frames: {}", source.describe(), e);
                break LoopExit::ReadFailed(e);
            }
        };

        if stop.load(Ordering::SeqCst) {
            break LoopExit::Interrupted;
        }

        frame_count += 1;
        let source_size = Resolution {
            width: frame.width,
            height: frame.height,
        };
        let art = converter.convert(&frame);
        renderer.render(art, frame_count, source_size)?;
        log::trace!("rendered frame {}", frame_count);
    };

    log::info!("loop ended after {} frame(s): {:?}", frame_count, exit);
    Ok(RunSummary {
        frames: frame_count,
        exit,
    })
}

/// Run a whole session: open the source, loop, release the source.
///
/// `open` acquires the frame source; if it fails nothing is rendered and
/// the error is returned. The source is dropped (releasing the device)
/// before this returns, on every path.
pub fn run_session<S, F, W>(
    settings: &Settings,
    open: F,
    out: W,
    stop: &AtomicBool,
) -> Result<RunSummary, AppError>
where
    S: FrameSource,
    F: FnOnce(&CameraSettings) -> Result<S, CameraError>,
    W: Write,
{
    let mut renderer = Renderer::new(out, settings.width, settings.mode);
    renderer.message(&format!("Starting ASCII cam ({} mode)...", settings.mode))?;
    renderer.message("Press Ctrl+C to quit\n")?;

    let mut source = open(&settings.camera)?;
    log::info!("opened {}", source.describe());
    renderer.message("Camera connected!")?;

    let mut converter = AsciiConverter::new(settings.width, settings.mode);
    let result = run_loop(&mut source, &mut converter, &mut renderer, stop);
    drop(source);

    match &result {
        Ok(summary) if summary.interrupted() => {
            renderer.message("\n\nASCII cam stopped")?;
        }
        Ok(RunSummary {
            exit: LoopExit::ReadFailed(e),
            ..
        }) => {
            renderer.message(&e.to_string())?;
        }
        _ => {}
    }
    renderer.message("Camera released")?;

    result
}

/// Troubleshooting lines printed when the camera cannot be opened.
pub fn troubleshooting_hints(err: &CameraError) -> Vec<&'static str> {
    let mut hints = vec!["Make sure no other app is using the camera"];
    match err {
        CameraError::PermissionDenied => {
            hints.push("Grant camera access to your terminal in the system privacy settings");
            hints.push("On macOS: System Settings > Privacy & Security > Camera");
        }
        CameraError::DeviceNotFound(_) | CameraError::NoDevices => {
            hints.push("Check that the camera is connected and enabled");
            hints.push("Run 'ascii-cam list-cameras' to see available devices");
        }
        _ => {
            hints.push("Check that the camera is enabled in your system settings");
            hints.push("Try a lower --resolution or a different --camera index");
        }
    }
    hints
}
