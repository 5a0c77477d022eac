//! Framebuffer surface
//!
//! Owns the packed pixel buffer and the cursor. Every write goes through
//! here and is clipped to the buffer, so out-of-range cursors are harmless:
//!
//! - [`Surface::clear`] drops rows above 0 and below `height`
//! - [`Surface::write_region`] truncates at the end of the buffer
//! - [`Surface::put_glyph`] skips columns outside `[0, width)` but still
//!   advances the cursor, and skips rows outside `[0, height)`

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

use crate::codec::Depth;
use crate::config::DisplayConfig;
use crate::cursor::{Cursor, Whence};
use crate::error::{ConfigError, SurfaceError};
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::geometry::Geometry;
use crate::logo::{self, LogoLayout, LOGO_128X8_GRAY4, LOGO_96X7_MONO, MONO_ROW_BYTES};

/// In-memory frame for one display.
pub struct Surface {
    geometry: Geometry,
    cursor: Cursor,
    logo: Option<LogoLayout>,
    data: Box<[u8]>,
}

impl Surface {
    /// Build a zeroed surface from raw configuration.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] raised by [`DisplayConfig::geometry`].
    pub fn new(config: &DisplayConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_geometry(config.geometry()?))
    }

    /// Build a zeroed surface from an already validated geometry.
    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            logo: LogoLayout::for_geometry(&geometry),
            cursor: Cursor::default(),
            data: vec![0; geometry.size()].into_boxed_slice(),
            geometry,
        }
    }

    /// Geometry of this surface.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.geometry.height()
    }

    /// Pixel packing.
    pub fn depth(&self) -> Depth {
        self.geometry.depth()
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.geometry.stride()
    }

    /// Bytes in the frame.
    pub fn frame_size(&self) -> usize {
        self.geometry.size()
    }

    /// Glyph cell width in pixels.
    pub fn font_width(&self) -> u32 {
        GLYPH_WIDTH as u32
    }

    /// Glyph cell height in pixels.
    pub fn font_height(&self) -> u32 {
        GLYPH_HEIGHT as u32
    }

    /// Logo dimensions for this depth, whether or not the width supports it.
    pub fn logo_size(&self) -> (u32, u32) {
        logo::logo_size(self.geometry.depth())
    }

    /// Raw packed frame, row-major, `stride` bytes per row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Current cursor.
    pub fn position(&self) -> Cursor {
        self.cursor
    }

    /// Place the cursor column without wrapping.
    pub fn set_x(&mut self, x: i64) {
        self.cursor.x = x;
    }

    /// Place the cursor row without wrapping.
    pub fn set_y(&mut self, y: i64) {
        self.cursor.y = y;
    }

    /// Move the cursor by `offset` bytes from `whence`. Returns the new byte
    /// offset, which may lie outside the buffer.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        self.cursor.seek(&self.geometry, offset, whence)
    }

    /// Zero `rows` rows starting at the cursor row.
    ///
    /// Rows outside the surface are dropped; nothing happens when no row
    /// remains.
    pub fn clear(&mut self, rows: u32) {
        let height = i64::from(self.geometry.height());
        let mut y = self.cursor.y;
        let mut rows = i64::from(rows);

        if y < 0 {
            rows = rows.saturating_add(y);
            y = 0;
        }
        if y.saturating_add(rows) > height {
            rows = height.saturating_sub(y);
        }
        if rows <= 0 {
            return;
        }

        let (Ok(y), Ok(rows)) = (usize::try_from(y), usize::try_from(rows)) else {
            return;
        };
        let stride = self.geometry.stride();
        // y + rows <= height, so both products are at most the frame size.
        #[allow(clippy::arithmetic_side_effects)]
        let range = stride * y..stride * (y + rows);
        if let Some(region) = self.data.get_mut(range) {
            region.fill(0);
        }
    }

    /// Copy `bytes` into the frame at the cursor, truncated at the end of
    /// the buffer. The cursor is normalised but not advanced.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::OutOfRange`] when the cursor lies before the start or
    /// past the end of the buffer.
    pub fn write_region(&mut self, bytes: &[u8]) -> Result<usize, SurfaceError> {
        let offset = self.seek(0, Whence::Cur);
        let size = self.geometry.size();
        let out_of_range = SurfaceError::OutOfRange { offset, size };

        let start = usize::try_from(offset).map_err(|_| out_of_range)?;
        let room = size.checked_sub(start).ok_or(out_of_range)?;
        let count = bytes.len().min(room);

        // start + count <= size by construction of `room`.
        #[allow(clippy::arithmetic_side_effects)]
        let dst = self
            .data
            .get_mut(start..start + count)
            .ok_or(out_of_range)?;
        let src = bytes.get(..count).ok_or(out_of_range)?;
        dst.copy_from_slice(src);
        Ok(count)
    }

    /// Light or darken pixel `(x, y)`. Pixels outside the surface are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, on: bool) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x >= self.geometry.width() as usize || y >= self.geometry.height() as usize {
            return;
        }
        self.geometry
            .depth()
            .locate(self.geometry.stride(), x, y)
            .write(&mut self.data, on);
    }

    /// Draw glyph `code` with its top-left corner at the cursor.
    ///
    /// Every column advances `x` by one, drawn or not; the cursor does not
    /// wrap to the next row.
    pub fn put_glyph(&mut self, code: u8) {
        let width = i64::from(self.geometry.width());
        for &column in font::glyph(code) {
            let x = self.cursor.x;
            if (0..width).contains(&x) {
                let mut y = self.cursor.y;
                for row in 0..GLYPH_HEIGHT {
                    // row < GLYPH_HEIGHT = 8, within a u8.
                    #[allow(clippy::arithmetic_side_effects)]
                    let lit = column & (1 << row) != 0;
                    self.set_pixel(x, y, lit);
                    y = y.saturating_add(1);
                }
            }
            self.cursor.advance();
        }
    }

    /// Draw one character; see [`font::code_for`] for the mapping.
    pub fn put_char(&mut self, c: char) {
        self.put_glyph(font::code_for(c));
    }

    /// Draw `text` left to right from the cursor. No wrapping, and control
    /// characters such as `'\n'` draw blank cells.
    pub fn put_string(&mut self, text: &str) {
        for c in text.chars() {
            self.put_char(c);
        }
    }

    /// Rasterise the boot logo at the cursor.
    ///
    /// The 4bpp logo is copied in one write and leaves the cursor in place.
    /// The 16bpp logo is written one row at a time, moving the cursor down a
    /// row after each. At either depth rows past the end of the buffer are
    /// dropped.
    ///
    /// # Errors
    ///
    /// - [`SurfaceError::UnsupportedLogo`] if no asset fits this geometry
    /// - [`SurfaceError::OutOfRange`] if the cursor starts outside the buffer
    pub fn draw_logo(&mut self) -> Result<(), SurfaceError> {
        match self.logo {
            Some(LogoLayout::Packed4) => {
                tracing::debug!(bytes = LOGO_128X8_GRAY4.len(), "drawing 4bpp logo");
                self.write_region(LOGO_128X8_GRAY4)?;
            }
            Some(LogoLayout::Mono16) => {
                tracing::debug!(bytes = LOGO_96X7_MONO.len(), "drawing 16bpp logo");
                // Geometry guarantees the frame size fits in an i64.
                #[allow(clippy::cast_possible_wrap)]
                let stride = self.geometry.stride() as i64;
                #[allow(clippy::cast_possible_wrap)]
                let size = self.geometry.size() as i64;
                let pixels = logo::expand_mono16(LOGO_96X7_MONO);
                for (index, row) in pixels.chunks(MONO_ROW_BYTES).enumerate() {
                    // Rows below the panel are clipped, as the 4bpp copy is.
                    if index > 0 && self.seek(0, Whence::Cur) >= size {
                        break;
                    }
                    self.write_region(row)?;
                    self.seek(stride, Whence::Cur);
                }
            }
            None => {
                return Err(SurfaceError::UnsupportedLogo {
                    width: self.geometry.width(),
                    bpp: self.geometry.bpp(),
                })
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Surface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Surface")
            .field("geometry", &self.geometry)
            .field("cursor", &self.cursor)
            .field("logo", &self.logo)
            .finish_non_exhaustive()
    }
}

/// Formatted text: `write!(surface, "{}%", level)`.
impl core::fmt::Write for Surface {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.put_string(s);
        Ok(())
    }
}

/// Raw byte writes at the cursor; see [`Surface::write_region`].
impl std::io::Write for Surface {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(self.write_region(buf)?)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl OriginDimensions for Surface {
    fn size(&self) -> Size {
        Size::new(self.geometry.width(), self.geometry.height())
    }
}

/// Draws embedded-graphics primitives as fully lit or dark pixels.
impl DrawTarget for Surface {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(i64::from(point.x), i64::from(point.y), color.is_on());
        }
        Ok(())
    }
}
