// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of [`IconRenderer`]:
//!
//! - [`raster`]: In-process drawing with `tiny-skia` (behind the `native` feature)
//! - [`magick`]: ImageMagick `convert` subprocess
//!
//! [`IconRenderer`]: crate::application::port::IconRenderer

pub mod magick;
#[cfg(feature = "native")]
pub mod raster;

pub use magick::MagickRenderer;
#[cfg(feature = "native")]
pub use raster::RasterRenderer;
