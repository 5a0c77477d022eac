//! Device transport
//!
//! A transport pushes a complete frame to the panel. The OLED driver takes
//! the whole packed buffer in a single `write`; anything less is a failure.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DeviceError;

/// Character device of the front-panel OLED.
pub const DEFAULT_DEVICE: &str = "/dev/dbox/oled0";

/// Sink for complete frames.
pub trait Transport {
    /// Write `frame` to the device in full.
    ///
    /// # Errors
    ///
    /// [`DeviceError::Write`] or [`DeviceError::ShortWrite`]. The caller's
    /// frame is unaffected and may be sent again.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DeviceError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DeviceError> {
        (**self).write_frame(frame)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DeviceError> {
        (**self).write_frame(frame)
    }
}

/// Framebuffer device node, closed on drop.
#[derive(Debug)]
pub struct OledDevice {
    file: File,
    path: PathBuf,
}

impl OledDevice {
    /// Open [`DEFAULT_DEVICE`].
    ///
    /// # Errors
    ///
    /// [`DeviceError::Open`] if the node can't be opened read/write.
    pub fn open_default() -> Result<Self, DeviceError> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Open `path` read/write. The descriptor is close-on-exec.
    ///
    /// # Errors
    ///
    /// [`DeviceError::Open`] if the node can't be opened read/write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| DeviceError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "opened display device");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Path the device was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the device now rather than on drop.
    pub fn release(self) {
        tracing::debug!(path = %self.path.display(), "releasing display device");
    }
}

impl Transport for OledDevice {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DeviceError> {
        let written = self.file.write(frame).map_err(DeviceError::Write)?;
        if written != frame.len() {
            return Err(DeviceError::ShortWrite {
                written,
                expected: frame.len(),
            });
        }
        Ok(())
    }
}
