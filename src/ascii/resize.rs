//! Aspect-corrected resizing of camera frames to a character grid.

use crate::camera::Frame;

/// Terminal glyphs are roughly twice as tall as they are wide. Scaling the
/// row count by this factor keeps the printed picture close to the source
/// aspect ratio.
pub const CHAR_ASPECT_COMPENSATION: f64 = 0.55;

/// Number of character rows for a frame resized to `width` columns.
///
/// `round(width * (img_height / img_width) * 0.55)`. Returns 0 when either
/// the source width or the target width is zero.
pub fn target_height(img_width: u32, img_height: u32, width: u32) -> u32 {
    if img_width == 0 || width == 0 {
        return 0;
    }
    let aspect_ratio = img_height as f64 / img_width as f64;
    (width as f64 * aspect_ratio * CHAR_ASPECT_COMPENSATION).round() as u32
}

/// Resize a frame to `width` columns, choosing the row count with
/// [`target_height`].
///
/// Each output pixel is the average of the source pixels it covers. When
/// the output is larger than the source along an axis, every output pixel
/// still covers at least the one source pixel it falls on.
pub fn resize(frame: &Frame, width: u32) -> Frame {
    let height = target_height(frame.width, frame.height, width);
    resize_exact(frame, width, height)
}

/// Resize a frame to exactly `width` x `height` by area averaging.
pub fn resize_exact(frame: &Frame, width: u32, height: u32) -> Frame {
    let img_width = frame.width;
    let img_height = frame.height;

    if width == 0 || height == 0 || frame.is_empty() || frame.data.is_empty() {
        return Frame::new(Vec::new(), 0, 0);
    }

    let cell_w = img_width as f32 / width as f32;
    let cell_h = img_height as f32 / height as f32;

    let mut data = Vec::with_capacity(width as usize * height as usize * Frame::BYTES_PER_PIXEL);

    for cy in 0..height {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);
        for cx in 0..width {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let (r, g, b) = frame.pixel(px, py);
                    sum[0] += r as u32;
                    sum[1] += g as u32;
                    sum[2] += b as u32;
                    count += 1;
                }
            }

            // cell_span never yields an empty range for a non-empty frame
            let count = count.max(1);
            data.extend(sum.iter().map(|s| (s / count) as u8));
        }
    }

    Frame::new(data, width, height)
}

/// Source pixel range `[start, end)` covered by output cell `i`.
#[inline]
fn cell_span(i: u32, cell: f32, limit: u32) -> (u32, u32) {
    let start = ((i as f32 * cell) as u32).min(limit - 1);
    let end = (((i + 1) as f32 * cell) as u32).clamp(start + 1, limit);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_height_vga() {
        // 120 * 0.75 * 0.55 = 49.5, rounds up
        assert_eq!(target_height(640, 480, 120), 50);
    }

    #[test]
    fn test_target_height_square() {
        assert_eq!(target_height(100, 100, 100), 55);
    }

    #[test]
    fn test_target_height_zero_inputs() {
        assert_eq!(target_height(0, 480, 120), 0);
        assert_eq!(target_height(640, 480, 0), 0);
    }

    #[test]
    fn test_resize_dimensions() {
        let frame = Frame::filled(640, 480, [1, 2, 3]);
        let out = resize(&frame, 80);
        assert_eq!(out.width, 80);
        assert_eq!(out.height, target_height(640, 480, 80));
        assert_eq!(out.data.len(), (out.width * out.height * 3) as usize);
    }

    #[test]
    fn test_resize_uniform_frame_keeps_colour() {
        let frame = Frame::filled(64, 48, [200, 100, 50]);
        let out = resize(&frame, 16);
        assert!(out.data.chunks_exact(3).all(|p| p == [200, 100, 50]));
    }

    #[test]
    fn test_resize_exact_averages_cells() {
        // 2x1 frame averaged down to 1x1
        let frame = Frame::new(vec![0, 0, 0, 100, 200, 50], 2, 1);
        let out = resize_exact(&frame, 1, 1);
        assert_eq!(out.data, vec![50, 100, 25]);
    }

    #[test]
    fn test_resize_exact_upscale_uses_covering_pixel() {
        let frame = Frame::new(vec![10, 10, 10, 90, 90, 90], 2, 1);
        let out = resize_exact(&frame, 4, 1);
        assert_eq!(
            out.data,
            vec![10, 10, 10, 10, 10, 10, 90, 90, 90, 90, 90, 90]
        );
    }

    #[test]
    fn test_resize_preserves_channel_order() {
        let frame = Frame::filled(8, 8, [255, 0, 0]);
        let out = resize_exact(&frame, 2, 2);
        assert_eq!(out.pixel(0, 0), (255, 0, 0));
    }

    #[test]
    fn test_resize_empty_inputs() {
        let empty = Frame::new(Vec::new(), 0, 0);
        assert!(resize(&empty, 10).is_empty());
        assert!(resize(&Frame::filled(4, 4, [0, 0, 0]), 0).is_empty());
    }
}
