//! The glyph ramp used for brightness mapping.

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark terminals.
pub const STANDARD_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Index into a ramp of `levels` characters for a brightness value.
///
/// Computed as `floor(value * levels / 256)`, which always lands in
/// `0..levels` for any `u8` input.
#[inline]
pub fn ramp_index(value: u8, levels: usize) -> usize {
    value as usize * levels / 256
}

/// The glyph for a brightness value on the given ramp.
///
/// An empty ramp maps everything to a space.
#[inline]
pub fn glyph_for(value: u8, ramp: &[char]) -> char {
    if ramp.is_empty() {
        return ' ';
    }
    ramp[ramp_index(value, ramp.len())]
}
