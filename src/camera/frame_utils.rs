//! Frame conversion and transformation utilities.

use nokhwa::pixel_format::RgbFormat;

use super::types::{CameraError, Frame};

/// Decode a nokhwa buffer into a packed RGB [`Frame`].
///
/// nokhwa's `decode_image` handles the camera's native format (MJPEG,
/// YUYV, NV12, ...) and always yields R, G, B byte order.
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Result<Frame, CameraError> {
    let decoded = buffer
        .decode_image::<RgbFormat>()
        .map_err(|e| CameraError::ReadFailed(e.to_string()))?;
    let (width, height) = decoded.dimensions();

    Ok(Frame::new(decoded.into_raw(), width, height))
}

/// Mirror a frame horizontally (flip left-right).
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let bpp = Frame::BYTES_PER_PIXEL;
    if width == 0 {
        return;
    }

    for row in frame.data.chunks_exact_mut(width * bpp) {
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}
