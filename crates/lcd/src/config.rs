//! Display configuration
//!
//! The kernel driver publishes the panel geometry as three files, each
//! holding one hexadecimal number:
//!
//! ```text
//! /proc/stb/lcd/xres    80     (128 px)
//! /proc/stb/lcd/yres    40     (64 px)
//! /proc/stb/lcd/bpp     4
//! ```
//!
//! A missing file falls back to the default for that field. A file that
//! exists but can't be read or parsed is an error.

use std::io;
use std::path::Path;

use crate::error::ConfigError;
use crate::geometry::Geometry;

/// Directory the driver exposes the geometry in.
pub const PROC_DIR: &str = "/proc/stb/lcd";

/// Default width when `xres` is missing.
pub const DEFAULT_WIDTH: u32 = 128;
/// Default height when `yres` is missing.
pub const DEFAULT_HEIGHT: u32 = 64;
/// Default depth when `bpp` is missing.
pub const DEFAULT_BPP: u32 = 4;

/// Unvalidated display geometry as read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bits per pixel.
    pub bpp: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bpp: DEFAULT_BPP,
        }
    }
}

impl DisplayConfig {
    /// Read the geometry from [`PROC_DIR`].
    ///
    /// # Errors
    ///
    /// See [`DisplayConfig::from_dir`].
    pub fn from_proc() -> Result<Self, ConfigError> {
        Self::from_dir(PROC_DIR)
    }

    /// Read `xres`, `yres` and `bpp` from `dir`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] or [`ConfigError::Parse`] for a file that exists
    /// but is unreadable or not a hexadecimal integer.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let config = Self {
            width: read_hex(&dir.join("xres"), DEFAULT_WIDTH)?,
            height: read_hex(&dir.join("yres"), DEFAULT_HEIGHT)?,
            bpp: read_hex(&dir.join("bpp"), DEFAULT_BPP)?,
        };
        tracing::debug!(
            width = config.width,
            height = config.height,
            bpp = config.bpp,
            dir = %dir.display(),
            "display configuration"
        );
        Ok(config)
    }

    /// Validate into a [`Geometry`]. This is the one place depth is checked.
    ///
    /// # Errors
    ///
    /// See [`Geometry::new`].
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.width, self.height, self.bpp)
    }
}

/// Read the first line of `path` as hex, or `default` if the file is absent.
fn read_hex(path: &Path, default: u32) -> Result<u32, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), default, "not present, using default");
            return Ok(default);
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let line = content.lines().next().unwrap_or_default();
    parse_hex(line).ok_or_else(|| ConfigError::Parse {
        path: path.to_path_buf(),
        value: line.trim().to_owned(),
    })
}

/// Parse an unsigned hexadecimal integer. Leading whitespace and an
/// optional `0x` prefix are skipped, parsing stops at the first non-hex
/// character, and at least one digit is required. Unlike `strtoul`, a `+`
/// or `-` sign is rejected: geometry values are never signed.
pub fn parse_hex(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(s.len());
    let digits = s.get(..end)?;
    u32::from_str_radix(digits, 16).ok()
}
