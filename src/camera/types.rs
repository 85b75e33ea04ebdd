//! Camera types and data structures.

use std::fmt;
use std::str::FromStr;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// 640x480, what the capture loop requests unless told otherwise.
    pub const VGA: Resolution = Resolution {
        width: 640,
        height: 480,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::VGA
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Parse a `WIDTHxHEIGHT` string such as `1280x720`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once('x').ok_or_else(|| {
            format!(
                "Invalid resolution format '{}'. Use WIDTHxHEIGHT (e.g., 640x480)",
                s
            )
        })?;
        let width: u32 = w
            .parse()
            .map_err(|_| format!("Invalid width '{}' in resolution", w))?;
        let height: u32 = h
            .parse()
            .map_err(|_| format!("Invalid height '{}' in resolution", h))?;
        if width == 0 || height == 0 {
            return Err("Resolution width and height must be greater than 0".to_string());
        }
        Ok(Resolution { width, height })
    }
}

/// A captured camera frame.
///
/// Pixels are stored row-major, three bytes per pixel in R, G, B order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw pixel data
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Frame {
    /// Bytes per pixel for the packed RGB layout.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Build a frame from packed RGB bytes.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * Self::BYTES_PER_PIXEL
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame of the given size with every pixel set to one colour.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * Self::BYTES_PER_PIXEL)
            .collect();
        Self::new(data, width, height)
    }

    /// Whether the frame holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The `(r, g, b)` triple at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Requested capture resolution
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Flip frames horizontally so the picture reads like a mirror
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            mirror: true,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// No cameras found on the system
    #[error("No cameras found")]
    NoDevices,

    /// Failed to query camera devices
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),

    /// Failed to open camera
    #[error("Failed to open camera: {0}")]
    OpenFailed(String),

    /// Camera permission denied by the OS
    #[error("Camera permission denied")]
    PermissionDenied,

    /// Camera device not found at specified index
    #[error("Camera device {0} not found. Run 'list-cameras' to see available devices")]
    DeviceNotFound(u32),

    /// Failed to start video stream
    #[error("Failed to start camera stream: {0}")]
    StreamFailed(String),

    /// Failed to grab or decode a frame from a running stream
    #[error("Failed to grab frame: {0}")]
    ReadFailed(String),
}

impl CameraError {
    /// Whether this error happened while acquiring the device, as opposed
    /// to while reading from an already open stream.
    pub fn is_open_failure(&self) -> bool {
        !matches!(self, CameraError::ReadFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_resolution_default_is_vga() {
        let res = Resolution::default();
        assert_eq!(res.width, 640);
        assert_eq!(res.height, 480);
        assert_eq!(res.to_string(), "640x480");
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!(
            "1280x720".parse::<Resolution>(),
            Ok(Resolution {
                width: 1280,
                height: 720
            })
        );
        assert!("1280".parse::<Resolution>().is_err());
        assert!("0x720".parse::<Resolution>().is_err());
        assert!("axb".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution, Resolution::VGA);
        assert_eq!(settings.fps, 30);
        assert!(settings.mirror);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(format!("{}", CameraError::NoDevices), "No cameras found");
        assert_eq!(
            format!("{}", CameraError::QueryFailed("test".to_string())),
            "Failed to query cameras: test"
        );
        assert_eq!(
            format!("{}", CameraError::OpenFailed("test".to_string())),
            "Failed to open camera: test"
        );
        assert!(format!("{}", CameraError::PermissionDenied).contains("permission denied"));
        assert!(format!("{}", CameraError::DeviceNotFound(5)).contains('5'));
        assert_eq!(
            format!("{}", CameraError::ReadFailed("eof".to_string())),
            "Failed to grab frame: eof"
        );
    }

    #[test]
    fn test_open_failure_classification() {
        assert!(CameraError::DeviceNotFound(1).is_open_failure());
        assert!(CameraError::StreamFailed("x".into()).is_open_failure());
        assert!(!CameraError::ReadFailed("x".into()).is_open_failure());
    }

    #[test]
    fn test_frame_filled_and_pixel() {
        let frame = Frame::filled(2, 2, [10, 20, 30]);
        assert_eq!(frame.data.len(), 12);
        assert_eq!(frame.pixel(1, 1), (10, 20, 30));
        assert!(!frame.is_empty());
        assert!(Frame::new(Vec::new(), 0, 0).is_empty());
    }
}
