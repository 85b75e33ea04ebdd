//! ASCII renderer module for converting camera frames to text art.
//!
//! Each frame goes through the same steps:
//!
//! 1. **Resize** - Scale to the target column count, correcting for glyph aspect
//! 2. **Grayscale conversion** - RGB to luminance using BT.601
//! 3. **Glyph encoding** - Map brightness onto [`STANDARD_RAMP`], optionally
//!    wrapping every glyph in a truecolor escape taken from the resized frame

mod charset;
mod encode;
mod grayscale;
mod resize;

use std::fmt;

use crate::camera::Frame;

pub use charset::{glyph_for, ramp_index, STANDARD_RAMP};
pub use encode::{
    encode_colored, encode_colored_into, encode_plain, encode_plain_into, strip_ansi, ANSI_RESET,
};
pub use grayscale::{luma, to_grayscale, to_grayscale_into, GrayFrame};
pub use resize::{resize, resize_exact, target_height, CHAR_ASPECT_COMPENSATION};

/// Whether glyphs are emitted plain or with per-pixel truecolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Grayscale,
    Color,
}

impl ColorMode {
    /// Pick the mode from a `--color` style flag.
    pub fn from_flag(color: bool) -> Self {
        if color {
            ColorMode::Color
        } else {
            ColorMode::Grayscale
        }
    }

    /// Human-readable name shown in the banner.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Grayscale => "Grayscale",
            ColorMode::Color => "RGB Color",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns camera frames into text, keeping its buffers between frames.
#[derive(Debug)]
pub struct AsciiConverter {
    width: u32,
    mode: ColorMode,
    gray: GrayFrame,
    text: String,
}

impl AsciiConverter {
    /// A converter producing `width` columns in the given mode.
    pub fn new(width: u32, mode: ColorMode) -> Self {
        Self {
            width,
            mode,
            gray: GrayFrame::default(),
            text: String::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Convert one frame. The returned text borrows the converter's buffer
    /// and is overwritten by the next call.
    pub fn convert(&mut self, frame: &Frame) -> &str {
        let resized = resize(frame, self.width);
        to_grayscale_into(&resized, &mut self.gray);
        match self.mode {
            ColorMode::Grayscale => encode_plain_into(&self.gray, STANDARD_RAMP, &mut self.text),
            ColorMode::Color => {
                encode_colored_into(&self.gray, &resized, STANDARD_RAMP, &mut self.text)
            }
        }
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_names() {
        assert_eq!(ColorMode::from_flag(false), ColorMode::Grayscale);
        assert_eq!(ColorMode::from_flag(true), ColorMode::Color);
        assert_eq!(ColorMode::Grayscale.to_string(), "Grayscale");
        assert_eq!(ColorMode::Color.to_string(), "RGB Color");
    }

    #[test]
    fn test_converter_plain_shape() {
        let mut conv = AsciiConverter::new(40, ColorMode::Grayscale);
        let text = conv.convert(&Frame::filled(320, 240, [255, 255, 255]));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), target_height(320, 240, 40) as usize);
        assert!(rows.iter().all(|r| *r == "@".repeat(40)));
    }

    #[test]
    fn test_converter_color_matches_plain() {
        let frame = Frame::new((0..(16 * 12 * 3)).map(|i| (i % 256) as u8).collect(), 16, 12);
        let plain = AsciiConverter::new(8, ColorMode::Grayscale)
            .convert(&frame)
            .to_string();
        let mut colored = AsciiConverter::new(8, ColorMode::Color);
        assert_eq!(strip_ansi(colored.convert(&frame)), plain);
    }
}
