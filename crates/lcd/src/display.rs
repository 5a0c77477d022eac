//! Display handle
//!
//! [`Lcd`] pairs a [`Surface`] with the [`Transport`] that flushes it. All
//! drawing happens on the surface (reachable through `Deref`); nothing
//! reaches the panel until [`Lcd::update`].

use core::ops::{Deref, DerefMut};
use std::path::Path;

use crate::config::DisplayConfig;
use crate::device::{OledDevice, Transport, DEFAULT_DEVICE};
use crate::error::{ConfigError, DeviceError, OpenError};
use crate::surface::Surface;

/// Kind of front-panel display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    /// Character-device OLED/LCD.
    Oled,
    /// HDMI output. No backend exists yet.
    Hdmi,
}

/// A surface bound to its device.
pub struct Lcd<T: Transport = OledDevice> {
    surface: Surface,
    transport: T,
}

impl Lcd<OledDevice> {
    /// Open the front-panel OLED with the geometry published in `/proc`.
    ///
    /// # Errors
    ///
    /// [`OpenError::Config`] if the geometry can't be read or is unsupported,
    /// [`OpenError::Device`] if the device node can't be opened.
    pub fn open() -> Result<Self, OpenError> {
        let config = DisplayConfig::from_proc()?;
        Self::open_at(&config, DEFAULT_DEVICE)
    }

    /// Open a display of the given type.
    ///
    /// # Errors
    ///
    /// As [`Lcd::open`]; [`DeviceError::Unsupported`] for [`DisplayType::Hdmi`].
    pub fn open_type(kind: DisplayType) -> Result<Self, OpenError> {
        match kind {
            DisplayType::Oled => Self::open(),
            DisplayType::Hdmi => Err(DeviceError::Unsupported.into()),
        }
    }

    /// Open the device at `path` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`Lcd::open`].
    pub fn open_at(config: &DisplayConfig, path: impl AsRef<Path>) -> Result<Self, OpenError> {
        // Validate before touching the device.
        let geometry = config.geometry()?;
        let transport = OledDevice::open(path)?;
        Ok(Self {
            surface: Surface::with_geometry(geometry),
            transport,
        })
    }
}

impl<T: Transport> Lcd<T> {
    /// Bind a fresh surface for `config` to `transport`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from validating `config`.
    pub fn with_transport(config: &DisplayConfig, transport: T) -> Result<Self, ConfigError> {
        Ok(Self {
            surface: Surface::new(config)?,
            transport,
        })
    }

    /// Send the whole frame to the device.
    ///
    /// The surface is untouched either way, so a failed update can simply be
    /// retried.
    ///
    /// # Errors
    ///
    /// The transport's [`DeviceError`].
    pub fn update(&mut self) -> Result<(), DeviceError> {
        let frame = self.surface.as_bytes();
        let result = self.transport.write_frame(frame);
        match &result {
            Ok(()) => tracing::debug!(bytes = frame.len(), "lcd frame flushed"),
            Err(err) => tracing::warn!(%err, "lcd update failed"),
        }
        result
    }

    /// The surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The surface, mutably.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// The transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Drop the surface and hand back the transport.
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: Transport> Deref for Lcd<T> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl<T: Transport> DerefMut for Lcd<T> {
    fn deref_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}
