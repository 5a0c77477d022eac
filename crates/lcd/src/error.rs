//! Error types
//!
//! Three families, one per boundary:
//! - [`ConfigError`]: geometry rejected while building a [`Surface`](crate::Surface)
//! - [`SurfaceError`]: recoverable failures of in-memory surface operations
//! - [`DeviceError`]: transport failures while opening or flushing a device
//!
//! [`OpenError`] wraps the first and last for [`Lcd::open`](crate::Lcd::open).

use std::io;
use std::path::PathBuf;

/// Display geometry could not be turned into a surface.
#[derive(Debug)]
pub enum ConfigError {
    /// Bit depth other than 4 or 16.
    UnsupportedDepth {
        /// The rejected depth.
        bpp: u32,
    },
    /// Width or height of zero.
    ZeroDimension {
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },
    /// `width * bpp` is not a whole number of bytes.
    UnalignedStride {
        /// Configured width in pixels.
        width: u32,
        /// Configured depth.
        bpp: u32,
    },
    /// Geometry too large to address.
    TooLarge {
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },
    /// A configuration file exists but does not contain a hex integer.
    Parse {
        /// File that was read.
        path: PathBuf,
        /// Its (trimmed) content.
        value: String,
    },
    /// A configuration file exists but could not be read.
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedDepth { bpp } => {
                write!(f, "unsupported bit depth {bpp} (expected 4 or 16)")
            }
            Self::ZeroDimension { width, height } => {
                write!(f, "display geometry {width}x{height} has a zero dimension")
            }
            Self::UnalignedStride { width, bpp } => {
                write!(f, "row of {width} pixels at {bpp}bpp is not a whole number of bytes")
            }
            Self::TooLarge { width, height } => {
                write!(f, "display geometry {width}x{height} is too large")
            }
            Self::Parse { path, value } => {
                write!(f, "{}: expected a hexadecimal integer, got {value:?}", path.display())
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Recoverable failure of a surface operation. The surface stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The cursor addresses a byte outside the buffer, so nothing can be written.
    OutOfRange {
        /// Byte offset derived from the cursor.
        offset: i64,
        /// Buffer size in bytes.
        size: usize,
    },
    /// No logo asset exists for this geometry.
    UnsupportedLogo {
        /// Surface width in pixels.
        width: u32,
        /// Surface depth.
        bpp: u32,
    },
}

impl core::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { offset, size } => {
                write!(f, "offset {offset} is outside the {size} byte framebuffer")
            }
            Self::UnsupportedLogo { width, bpp } => {
                write!(f, "no logo for a {width} pixel wide {bpp}bpp display")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Transport failure. Flushing can be retried by the caller.
#[derive(Debug)]
pub enum DeviceError {
    /// The device node could not be opened.
    Open {
        /// Device path.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// `write` returned an error.
    Write(io::Error),
    /// The device accepted fewer bytes than the frame holds.
    ShortWrite {
        /// Bytes accepted.
        written: usize,
        /// Frame size.
        expected: usize,
    },
    /// No backend exists for the requested display type.
    Unsupported,
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Open { path, source } => write!(f, "can't open {}: {source}", path.display()),
            Self::Write(source) => write!(f, "write error: {source}"),
            Self::ShortWrite { written, expected } => {
                write!(f, "short write ({written} of {expected} bytes)")
            }
            Self::Unsupported => write!(f, "display type has no backend"),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Write(source) => Some(source),
            _ => None,
        }
    }
}

/// Opening a display failed, either reading its geometry or its device.
#[derive(Debug)]
pub enum OpenError {
    /// Geometry could not be read or is unsupported.
    Config(ConfigError),
    /// Device could not be opened.
    Device(DeviceError),
}

impl core::fmt::Display for OpenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "lcd: {err}"),
            Self::Device(err) => write!(f, "lcd: {err}"),
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Device(err) => Some(err),
        }
    }
}

impl From<ConfigError> for OpenError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<DeviceError> for OpenError {
    fn from(err: DeviceError) -> Self {
        Self::Device(err)
    }
}

impl From<SurfaceError> for io::Error {
    fn from(err: SurfaceError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::UnsupportedDepth { bpp: 8 };
        assert_eq!(err.to_string(), "unsupported bit depth 8 (expected 4 or 16)");

        let err = ConfigError::Parse {
            path: PathBuf::from("/proc/stb/lcd/bpp"),
            value: "zz".into(),
        };
        assert_eq!(
            err.to_string(),
            "/proc/stb/lcd/bpp: expected a hexadecimal integer, got \"zz\""
        );
    }

    #[test]
    fn test_device_error_source() {
        use std::error::Error;

        let err = DeviceError::Write(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(err.source().is_some());
        let err = DeviceError::ShortWrite { written: 3, expected: 8 };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "short write (3 of 8 bytes)");
    }

    #[test]
    fn test_surface_error_into_io() {
        let err: io::Error = SurfaceError::OutOfRange { offset: -4, size: 16 }.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
