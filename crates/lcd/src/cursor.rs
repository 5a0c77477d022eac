//! Cursor addressing
//!
//! The cursor is a pixel coordinate. Seeks take *byte* offsets, converted to
//! pixels with `offset * 8 / bpp`, so one row is always `stride` bytes away
//! regardless of depth.
//!
//! After every seek the flat pixel index `y * width + x` is re-split into
//! `(x, y)`, which wraps positions across row boundaries:
//!
//! ```text
//! width = 4        pixels = 9  ->  x = 1, y = 2
//! . . . .          pixels = -1 ->  x = 3, y = -1
//! . . . .
//! . x . .
//! ```
//!
//! Nothing here is clamped to the surface; the surface clips at write time.

use crate::geometry::Geometry;

/// Origin of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// From the top-left corner `(0, 0)`.
    Set,
    /// From the current position.
    Cur,
    /// From `(0, height)`, one row past the bottom.
    End,
}

/// Current write position in pixels.
///
/// `x` may run past the right edge while glyphs are drawn; the next seek
/// brings it back into `[0, width)`. `y` is never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Cursor {
    /// Cursor at `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Move by `offset` bytes relative to `whence` and return the new byte
    /// offset of the cursor.
    ///
    /// Overflowing arithmetic saturates; such positions are outside any
    /// surface and are clipped by the writers.
    pub fn seek(&mut self, geometry: &Geometry, offset: i64, whence: Whence) -> i64 {
        let bpp = i64::from(geometry.bpp());
        let width = i64::from(geometry.width());

        // bpp is 4 or 16, never zero.
        #[allow(clippy::arithmetic_side_effects)]
        let delta = offset.saturating_mul(8) / bpp;

        match whence {
            Whence::Set => *self = Self::new(0, 0),
            Whence::Cur => {}
            Whence::End => *self = Self::new(0, i64::from(geometry.height())),
        }

        let pixels = self
            .y
            .saturating_mul(width)
            .saturating_add(self.x)
            .saturating_add(delta);
        // width >= 1, so neither operation can overflow or divide by zero.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.x = pixels.rem_euclid(width);
            self.y = pixels.div_euclid(width);
        }

        self.byte_offset(geometry)
    }

    /// Byte offset of the cursor: `stride * y + x * bpp / 8`.
    pub fn byte_offset(&self, geometry: &Geometry) -> i64 {
        let bpp = i64::from(geometry.bpp());
        // Geometry guarantees stride * height fits in an i64.
        #[allow(clippy::cast_possible_wrap)]
        let stride = geometry.stride() as i64;
        // Division by a non-zero constant.
        #[allow(clippy::arithmetic_side_effects)]
        let column = self.x.saturating_mul(bpp) / 8;
        stride.saturating_mul(self.y).saturating_add(column)
    }

    /// Step one column right, as after drawing a glyph column.
    pub fn advance(&mut self) {
        self.x = self.x.saturating_add(1);
    }
}
