//! Pixel packing
//!
//! Two depths are supported:
//!
//! ```text
//! Gray4   one byte = two pixels     [ x even : x odd ]   high nibble first
//! Rgb16   two bytes = one pixel     [ hi : lo ]          0xFFFF on, 0x0000 off
//! ```
//!
//! Writers never range-check. The surface only hands them addresses it has
//! already clipped to the buffer.

use crate::error::ConfigError;

/// Nibble mask for pixels in even columns.
pub const HIGH_NIBBLE: u8 = 0xF0;
/// Nibble mask for pixels in odd columns.
pub const LOW_NIBBLE: u8 = 0x0F;

/// 16bpp value of a lit pixel.
pub const RGB16_ON: u16 = 0xFFFF;
/// 16bpp value of a dark pixel.
pub const RGB16_OFF: u16 = 0x0000;

/// Bits per pixel of the backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// 4-bit grayscale, two pixels per byte.
    Gray4,
    /// 16-bit, one pixel per two bytes.
    Rgb16,
}

impl Depth {
    /// Map a configured bit depth to a supported packing.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedDepth`] for anything but 4 and 16.
    pub fn from_bpp(bpp: u32) -> Result<Self, ConfigError> {
        match bpp {
            4 => Ok(Self::Gray4),
            16 => Ok(Self::Rgb16),
            _ => Err(ConfigError::UnsupportedDepth { bpp }),
        }
    }

    /// Bits per pixel.
    pub const fn bpp(self) -> u32 {
        match self {
            Self::Gray4 => 4,
            Self::Rgb16 => 16,
        }
    }

    /// Byte offset of column `x` within its row.
    ///
    /// At 4bpp two columns share a byte, so the offset is `x / 2` and the
    /// column parity picks the nibble: [`HIGH_NIBBLE`] for even columns,
    /// [`LOW_NIBBLE`] for odd ones.
    // bpp is 4 or 16: x * 16 stays far below usize::MAX for any column that
    // passed the surface's width check.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn column_offset(self, x: usize) -> usize {
        x * self.bpp() as usize / 8
    }

    /// Address of pixel `(x, y)` in a buffer with `stride` bytes per row.
    // Callers pass x < width, y < height; stride * y + column_offset(x) is
    // then below stride * height, which was checked at construction.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn locate(self, stride: usize, x: usize, y: usize) -> PixelAddr {
        let offset = stride * y + self.column_offset(x);
        let selector = match self {
            Self::Gray4 => {
                if x & 1 == 1 {
                    Selector::LowNibble
                } else {
                    Selector::HighNibble
                }
            }
            Self::Rgb16 => Selector::Word,
        };
        PixelAddr { offset, selector }
    }
}

/// Which part of the addressed byte(s) a pixel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Even column at 4bpp.
    HighNibble,
    /// Odd column at 4bpp.
    LowNibble,
    /// Two bytes, high byte first, at 16bpp.
    Word,
}

/// Byte offset plus sub-byte selector of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelAddr {
    /// Offset of the first byte holding the pixel.
    pub offset: usize,
    /// Part of the byte(s) holding the pixel.
    pub selector: Selector,
}

impl PixelAddr {
    /// Light or darken the addressed pixel.
    ///
    /// # Panics
    ///
    /// If the address lies outside `buf`.
    pub fn write(self, buf: &mut [u8], on: bool) {
        match self.selector {
            Selector::HighNibble => put_gray4(buf, self.offset, HIGH_NIBBLE, on),
            Selector::LowNibble => put_gray4(buf, self.offset, LOW_NIBBLE, on),
            Selector::Word => put_rgb16(buf, self.offset, on),
        }
    }
}

/// Set (`on`) or clear the nibble selected by `mask` in `buf[offset]`.
///
/// The other nibble is never touched.
///
/// # Panics
///
/// If `offset` is outside `buf`.
#[allow(clippy::indexing_slicing)]
pub fn put_gray4(buf: &mut [u8], offset: usize, mask: u8, on: bool) {
    let byte = &mut buf[offset];
    if on {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

/// Store a full-bright or full-dark 16bpp pixel at `buf[offset..offset + 2]`.
///
/// # Panics
///
/// If the two bytes are not inside `buf`.
#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
pub fn put_rgb16(buf: &mut [u8], offset: usize, on: bool) {
    let value = if on { RGB16_ON } else { RGB16_OFF };
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}
