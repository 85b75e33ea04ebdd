//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use crate::camera::Frame;

/// Single-channel brightness grid, one byte per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrayFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl GrayFrame {
    /// Build a grid from row-major brightness values.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact(0) panics, and a zero-width grid has no rows anyway
        let width = (self.width as usize).max(1);
        self.data.chunks_exact(width).take(self.height as usize)
    }
}

/// BT.601 luma of one pixel, with coefficients scaled by 1000.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Convert an RGB frame to grayscale using ITU-R BT.601 luminance formula.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math keeps floating point out of the per-frame path. The
/// coefficients are scaled by 1000 and the result truncated.
pub fn to_grayscale(frame: &Frame) -> GrayFrame {
    let mut gray = GrayFrame::default();
    to_grayscale_into(frame, &mut gray);
    gray
}

/// Convert an RGB frame to grayscale, reusing an existing buffer.
///
/// Returns the number of pixels written.
pub fn to_grayscale_into(frame: &Frame, out: &mut GrayFrame) -> usize {
    out.data.clear();
    out.data.reserve(frame.data.len() / Frame::BYTES_PER_PIXEL);
    out.data.extend(
        frame
            .data
            .chunks_exact(Frame::BYTES_PER_PIXEL)
            .map(|rgb| luma(rgb[0], rgb[1], rgb[2])),
    );
    out.width = frame.width;
    out.height = frame.height;
    out.data.len()
}
