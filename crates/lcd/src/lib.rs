//! Front-panel display framebuffer
//!
//! A cursor-addressed pixel surface for small OLED/LCD panels exposed as a
//! character device, drawn with fixed 6x8 glyphs and a boot logo, and
//! flushed to the panel one whole frame at a time.
//!
//! # Architecture
//!
//! ```text
//! Lcd (display)                surface + transport, update()
//!   ├── Surface (surface)      clear / write_region / put_glyph / draw_logo
//!   │     ├── Cursor (cursor)  byte seek -> wrapped (x, y)
//!   │     └── Depth (codec)    (x, y) -> byte + nibble/word, pixel writes
//!   └── Transport (device)     OledDevice, mocks::MockTransport
//! ```
//!
//! Boundary data lives in [`font`] (glyph table), [`logo`] (raster assets)
//! and [`config`] (geometry from `/proc/stb/lcd`).
//!
//! # Features
//!
//! - `mocks`: export [`mocks`] for downstream tests
//!
//! # Example
//!
//! ```no_run
//! use lcd::{Lcd, Whence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut lcd = Lcd::open()?;
//! lcd.draw_logo()?;
//! let (stride, rows) = (lcd.stride() as i64, lcd.font_height());
//! lcd.seek(stride * 16, Whence::Set);
//! lcd.clear(rows);
//! lcd.put_string("Hello");
//! lcd.update()?;
//! # Ok(())
//! # }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing over println! in lib code
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)] // u32 geometry <-> usize on 32/64-bit hosts

pub mod codec;
pub mod config;
pub mod cursor;
pub mod device;
pub mod display;
pub mod error;
pub mod font;
pub mod geometry;
pub mod logo;
pub mod mocks;
pub mod surface;

pub use codec::{Depth, PixelAddr, Selector};
pub use config::DisplayConfig;
pub use cursor::{Cursor, Whence};
pub use device::{OledDevice, Transport};
pub use display::{DisplayType, Lcd};
pub use error::{ConfigError, DeviceError, OpenError, SurfaceError};
pub use font::{GLYPH_HEIGHT, GLYPH_WIDTH};
pub use geometry::Geometry;
pub use surface::Surface;
