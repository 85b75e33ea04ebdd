//! Blocking camera capture handle.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;

use super::device::list_devices;
use super::frame_utils::{convert_to_rgb, mirror_horizontal};
use super::source::FrameSource;
use super::types::{CameraError, CameraSettings, Frame, Resolution};

/// Camera capture handle.
///
/// Wraps a nokhwa [`Camera`] with an open stream. Frames are pulled on the
/// caller's thread with [`FrameSource::read_frame`], which blocks until the
/// device delivers the next one. The stream is stopped when the handle is
/// dropped.
pub struct CameraCapture {
    camera: Camera,
    settings: CameraSettings,
    actual_resolution: Resolution,
    actual_fps: u32,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("actual_resolution", &self.actual_resolution)
            .field("actual_fps", &self.actual_fps)
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera and start its stream.
    ///
    /// # Errors
    /// * `CameraError::NoDevices` - If the system reports no cameras
    /// * `CameraError::DeviceNotFound` - If the device index doesn't exist
    /// * `CameraError::PermissionDenied` - If camera access is denied
    /// * `CameraError::OpenFailed` - If the camera fails to open for other reasons
    /// * `CameraError::StreamFailed` - If the stream fails to start
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = list_devices()?;
        if devices.is_empty() {
            return Err(CameraError::NoDevices);
        }
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }

        let index = CameraIndex::Index(settings.device_index);
        let mut camera = open_camera_with_fallback(&index, &settings)?;

        camera
            .open_stream()
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        let res = camera.resolution();
        let actual_resolution = Resolution {
            width: res.width(),
            height: res.height(),
        };
        let actual_fps = camera.frame_rate();
        log::info!(
            "camera {} streaming at {} @ {} fps (requested {} @ {} fps)",
            settings.device_index,
            actual_resolution,
            actual_fps,
            settings.resolution,
            settings.fps
        );

        Ok(Self {
            camera,
            settings,
            actual_resolution,
            actual_fps,
        })
    }

    /// Get the current camera settings.
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// The resolution the device actually negotiated.
    ///
    /// This may differ from the requested resolution if the camera
    /// doesn't support it exactly.
    pub fn actual_resolution(&self) -> Resolution {
        self.actual_resolution
    }

    /// The frame rate the device actually negotiated.
    pub fn actual_fps(&self) -> u32 {
        self.actual_fps
    }
}

impl FrameSource for CameraCapture {
    fn read_frame(&mut self) -> Result<Frame, CameraError> {
        let raw = self
            .camera
            .frame()
            .map_err(|e| CameraError::ReadFailed(e.to_string()))?;
        let mut frame = convert_to_rgb(&raw)?;
        if self.settings.mirror {
            mirror_horizontal(&mut frame);
        }
        Ok(frame)
    }

    fn describe(&self) -> String {
        format!("camera {}", self.settings.device_index)
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            log::warn!("failed to stop camera stream: {}", e);
        }
        log::debug!("camera {} released", self.settings.device_index);
    }
}

/// Try to open a camera with multiple format fallback strategies.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    // In order: NV12 (native on macOS), MJPEG (widely supported), then
    // whatever the device offers at its highest resolution.
    let requested_resolution =
        nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);
    let format_attempts = [
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            requested_resolution,
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            requested_resolution,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = None;

    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("camera format attempt failed: {}", e);
                last_error = Some(e);
            }
        }
    }

    let msg = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "no format could be negotiated".to_string());
    Err(classify_open_error(&msg))
}

/// Map a backend error message onto the matching [`CameraError`].
fn classify_open_error(msg: &str) -> CameraError {
    let lower = msg.to_lowercase();
    if lower.contains("permission")
        || lower.contains("denied")
        || lower.contains("authorization")
        || lower.contains("access")
    {
        CameraError::PermissionDenied
    } else {
        CameraError::OpenFailed(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_errors() {
        assert!(matches!(
            classify_open_error("Permission denied (os error 13)"),
            CameraError::PermissionDenied
        ));
        assert!(matches!(
            classify_open_error("Camera AUTHORIZATION missing"),
            CameraError::PermissionDenied
        ));
    }

    #[test]
    fn test_classify_other_errors() {
        match classify_open_error("device busy") {
            CameraError::OpenFailed(msg) => assert_eq!(msg, "device busy"),
            other => panic!("Expected OpenFailed, got {:?}", other),
        }
    }
}
