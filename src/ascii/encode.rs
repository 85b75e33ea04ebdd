//! Brightness to glyph encoding, plain or with truecolor escapes.

use std::fmt::Write;

use super::charset::glyph_for;
use super::grayscale::GrayFrame;
use crate::camera::Frame;

/// SGR reset, emitted after every coloured glyph.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Encode a brightness grid as plain text.
///
/// One glyph per value, each row terminated by `\n`. The result holds
/// exactly `height * (width + 1)` characters.
pub fn encode_plain(gray: &GrayFrame, ramp: &[char]) -> String {
    let mut out = String::with_capacity(gray.height as usize * (gray.width as usize + 1));
    encode_plain_into(gray, ramp, &mut out);
    out
}

/// Plain encoding into an existing buffer, which is cleared first.
pub fn encode_plain_into(gray: &GrayFrame, ramp: &[char], out: &mut String) {
    out.clear();
    for row in gray.rows() {
        out.extend(row.iter().map(|&v| glyph_for(v, ramp)));
        out.push('\n');
    }
}

/// Encode a brightness grid with each glyph coloured by the matching pixel
/// of `colors`.
///
/// `colors` is the RGB frame the grid was derived from and must have the
/// same dimensions. Each glyph is written as `ESC[38;2;R;G;Bm<glyph>ESC[0m`,
/// channels in R, G, B order. Rows end with `\n`.
pub fn encode_colored(gray: &GrayFrame, colors: &Frame, ramp: &[char]) -> String {
    let mut out = String::new();
    encode_colored_into(gray, colors, ramp, &mut out);
    out
}

/// Coloured encoding into an existing buffer, which is cleared first.
pub fn encode_colored_into(gray: &GrayFrame, colors: &Frame, ramp: &[char], out: &mut String) {
    debug_assert_eq!((gray.width, gray.height), (colors.width, colors.height));
    out.clear();
    for (y, row) in gray.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let (r, g, b) = colors.pixel(x as u32, y as u32);
            // Writing to a String cannot fail
            let _ = write!(
                out,
                "\x1b[38;2;{};{};{}m{}{}",
                r,
                g,
                b,
                glyph_for(v, ramp),
                ANSI_RESET
            );
        }
        out.push('\n');
    }
}

/// Remove CSI escape sequences (`ESC [ ... final`) from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in @..=~
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}
