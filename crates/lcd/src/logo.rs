//! Boot logo assets
//!
//! | Asset                 | Geometry | Format                          |
//! |-----------------------|----------|---------------------------------|
//! | [`LOGO_128X8_GRAY4`]  | 128 x 8  | pre-packed 4bpp, written as is  |
//! | [`LOGO_96X7_MONO`]    | 96 x 7   | 1bpp MSB first, expanded to 16bpp |

use crate::codec::{Depth, RGB16_OFF, RGB16_ON};
use crate::geometry::Geometry;

/// 128x8 logo, 4bpp, row-major, high nibble = even column.
pub static LOGO_128X8_GRAY4: &[u8; 512] = include_bytes!("../assets/logo_128x8_gray4.bin");

/// 96x7 logo, 1bpp, row-major, MSB = leftmost pixel.
pub static LOGO_96X7_MONO: &[u8; 84] = include_bytes!("../assets/logo_96x7_mono.bin");

/// Width of the 4bpp logo, which is also the only display width it fits.
pub const GRAY4_WIDTH: u32 = 128;
/// Height of the 4bpp logo.
pub const GRAY4_HEIGHT: u32 = 8;

/// Width of the mono logo.
pub const MONO_WIDTH: u32 = 96;
/// Height of the mono logo.
pub const MONO_HEIGHT: u32 = 7;

/// Bytes per row of the mono logo once expanded to 16bpp.
pub const MONO_ROW_BYTES: usize = MONO_WIDTH as usize * 2;

/// How the logo is rasterised on a given geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoLayout {
    /// Copy [`LOGO_128X8_GRAY4`] verbatim.
    Packed4,
    /// Expand [`LOGO_96X7_MONO`] to 16bpp and write it row by row.
    Mono16,
}

impl LogoLayout {
    /// Layout for `geometry`, or `None` when no asset fits.
    pub fn for_geometry(geometry: &Geometry) -> Option<Self> {
        match geometry.depth() {
            Depth::Gray4 if geometry.width() == GRAY4_WIDTH => Some(Self::Packed4),
            Depth::Rgb16 if geometry.width() >= MONO_WIDTH => Some(Self::Mono16),
            _ => None,
        }
    }
}

/// Logo `(width, height)` in pixels for a depth.
pub const fn logo_size(depth: Depth) -> (u32, u32) {
    match depth {
        Depth::Gray4 => (GRAY4_WIDTH, GRAY4_HEIGHT),
        Depth::Rgb16 => (MONO_WIDTH, MONO_HEIGHT),
    }
}

/// Expand a 1bpp MSB-first bitmap into 16bpp on/off pixels.
///
/// Byte `i`, bit `7 - j` becomes pixel `8 * i + j`.
// Shifts are by 0..8 on a u8.
#[allow(clippy::arithmetic_side_effects)]
pub fn expand_mono16(mono: &[u8]) -> Vec<u8> {
    mono.iter()
        .flat_map(|&byte| (0..8).map(move |j| byte & (0x80 >> j) != 0))
        .flat_map(|on| (if on { RGB16_ON } else { RGB16_OFF }).to_be_bytes())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;

    #[test]
    fn test_asset_sizes_match_geometry() {
        assert_eq!(LOGO_128X8_GRAY4.len(), (GRAY4_WIDTH * GRAY4_HEIGHT / 2) as usize);
        assert_eq!(LOGO_96X7_MONO.len(), (MONO_WIDTH * MONO_HEIGHT / 8) as usize);
    }

    #[test]
    fn test_layout_selection() {
        let g = Geometry::new(128, 64, 4).unwrap();
        assert_eq!(LogoLayout::for_geometry(&g), Some(LogoLayout::Packed4));

        let g = Geometry::new(256, 64, 4).unwrap();
        assert_eq!(LogoLayout::for_geometry(&g), None);

        let g = Geometry::new(96, 64, 16).unwrap();
        assert_eq!(LogoLayout::for_geometry(&g), Some(LogoLayout::Mono16));

        let g = Geometry::new(400, 240, 16).unwrap();
        assert_eq!(LogoLayout::for_geometry(&g), Some(LogoLayout::Mono16));

        let g = Geometry::new(80, 64, 16).unwrap();
        assert_eq!(LogoLayout::for_geometry(&g), None);
    }

    #[test]
    fn test_logo_size() {
        assert_eq!(logo_size(Depth::Gray4), (128, 8));
        assert_eq!(logo_size(Depth::Rgb16), (96, 7));
    }

    #[test]
    fn test_expand_mono16_bit_order() {
        let out = expand_mono16(&[0b1000_0001]);
        assert_eq!(out.len(), 16);
        assert_eq!(&out[0..2], &[0xFF, 0xFF]);
        assert!(out[2..14].iter().all(|&b| b == 0));
        assert_eq!(&out[14..16], &[0xFF, 0xFF]);
    }

    #[test]
    fn test_expand_full_logo() {
        let out = expand_mono16(LOGO_96X7_MONO);
        assert_eq!(out.len(), MONO_ROW_BYTES * MONO_HEIGHT as usize);
        assert!(out.iter().any(|&b| b == 0xFF));
    }
}
