//! Drawing surface addressed with signed canvas coordinates

use crate::geometry::Size;
use crate::style::Style;
use std::ops::Range;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// Rejection of a single draw primitive
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The target cell lies outside the surface
    #[error("cell ({x}, {y}) is outside the drawing surface")]
    OutOfBounds { x: i32, y: i32 },
}

/// Part of `from..to` inside the `u16` coordinate space of every surface
pub fn addressable(from: i32, to: i32) -> Range<i32> {
    from.max(0)..to.min(i32::from(u16::MAX) + 1)
}

/// A grid of cells that accepts glyph writes at `(x, y)`
///
/// Coordinates are signed because canvas content may be dragged or edited
/// off-screen. A write outside the surface is rejected with
/// [`DrawError::OutOfBounds`] and leaves the surface untouched; callers drawing
/// composite shapes ignore the rejection and carry on with the next primitive.
pub trait Surface {
    /// Size of the addressable area
    fn size(&self) -> Size;

    /// Write a single character
    fn put_char(&mut self, x: i32, y: i32, ch: char, style: Style) -> Result<(), DrawError>;

    /// Write a run of characters on one row
    ///
    /// Every character is attempted; the first rejection (if any) is returned
    /// after the visible part has been written.
    fn put_str(&mut self, x: i32, y: i32, s: &str, style: Style) -> Result<(), DrawError> {
        let mut first_err = None;
        let mut cx = x;
        for c in s.chars() {
            if let Err(e) = self.put_char(cx, y, c, style) {
                first_err.get_or_insert(e);
            }
            cx = cx.saturating_add(UnicodeWidthChar::width(c).unwrap_or(1) as i32);
        }
        first_err.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addressable_clamps_to_cell_space() {
        assert_eq!(addressable(3, 8), 3..8);
        assert_eq!(addressable(-5, 2), 0..2);
        assert_eq!(addressable(i32::MIN, i32::MAX), 0..65536);
        assert!(addressable(i32::MAX, i32::MAX).is_empty());
    }
}
