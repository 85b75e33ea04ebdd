//! The frame source seam between the run loop and a capture device.

use super::types::{CameraError, Frame};

/// Something that yields successive RGB frames.
///
/// `read_frame` blocks until the next frame is available. Releasing the
/// underlying device happens when the source is dropped.
pub trait FrameSource {
    /// Block until the next frame is available.
    fn read_frame(&mut self) -> Result<Frame, CameraError>;

    /// Short human-readable description, used in log output.
    fn describe(&self) -> String {
        String::from("frame source")
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn read_frame(&mut self) -> Result<Frame, CameraError> {
        (**self).read_frame()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
