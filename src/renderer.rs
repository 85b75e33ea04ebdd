//! Full-screen terminal output for converted frames.
//!
//! Every frame is drawn from scratch: clear, banner, separator, the text
//! art, separator, then a status line.

use std::io::Write;

use crate::ascii::ColorMode;
use crate::camera::Resolution;

/// Erase the display and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Separator lines run this many columns past the art width.
const SEPARATOR_EXTRA: usize = 20;

/// Writes rendered frames to a terminal (or any writer).
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
    width: u32,
    mode: ColorMode,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, width: u32, mode: ColorMode) -> Self {
        Self { out, width, mode }
    }

    /// The mode banner printed above each frame.
    pub fn banner(&self) -> String {
        format!("ASCII CAM - {} Mode (Press Ctrl+C to quit)", self.mode)
    }

    /// A row of `=` sized to the configured width.
    pub fn separator(&self) -> String {
        "=".repeat(self.width as usize + SEPARATOR_EXTRA)
    }

    /// Clear the screen and draw one frame.
    ///
    /// `source` is the captured frame's size before resizing.
    pub fn render(&mut self, art: &str, frame_count: u64, source: Resolution) -> std::io::Result<()> {
        let separator = self.separator();
        let banner = self.banner();

        // Whole frame goes out in a single write
        let mut output = String::with_capacity(art.len() + 2 * separator.len() + 128);
        output.push_str(CLEAR_SCREEN);
        output.push_str(&banner);
        output.push('\n');
        output.push_str(&separator);
        output.push('\n');
        output.push_str(art);
        output.push_str(&separator);
        output.push('\n');
        output.push_str(&format!(
            "Frame: {} | Resolution: {}x{}\n",
            frame_count, source.width, source.height
        ));

        self.out.write_all(output.as_bytes())?;
        self.out.flush()
    }

    /// Write a plain line, outside of frame rendering.
    pub fn message(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
