//! Validated display geometry

use crate::codec::Depth;
use crate::error::ConfigError;

/// Width, height and depth of a surface together with the derived stride
/// and buffer size.
///
/// Only constructible through [`Geometry::new`], which guarantees
/// `stride == width * bpp / 8` exactly and `size == stride * height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u32,
    height: u32,
    depth: Depth,
    stride: usize,
    size: usize,
}

impl Geometry {
    /// Validate a raw `(width, height, bpp)` triple.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedDepth`] unless `bpp` is 4 or 16
    /// - [`ConfigError::ZeroDimension`] if either dimension is 0
    /// - [`ConfigError::UnalignedStride`] if a row is not a whole number of bytes
    /// - [`ConfigError::TooLarge`] if the buffer size overflows
    pub fn new(width: u32, height: u32, bpp: u32) -> Result<Self, ConfigError> {
        let depth = Depth::from_bpp(bpp)?;
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }

        let too_large = || ConfigError::TooLarge { width, height };
        let row_bits = u64::from(width)
            .checked_mul(u64::from(bpp))
            .ok_or_else(too_large)?;
        if row_bits % 8 != 0 {
            return Err(ConfigError::UnalignedStride { width, bpp });
        }

        let stride = usize::try_from(row_bits / 8).map_err(|_| too_large())?;
        // Every byte offset must fit in an i64 for the seek math.
        let size = stride
            .checked_mul(height as usize)
            .filter(|size| i64::try_from(*size).is_ok())
            .ok_or_else(too_large)?;

        Ok(Self {
            width,
            height,
            depth,
            stride,
            size,
        })
    }

    /// Width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel packing.
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    /// Bits per pixel.
    pub const fn bpp(&self) -> u32 {
        self.depth.bpp()
    }

    /// Bytes per row.
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Bytes in the whole frame.
    pub const fn size(&self) -> usize {
        self.size
    }
}
