// SPDX-License-Identifier: MPL-2.0
//! Icon domain types.
//!
//! Sizes, colors and layout of the badge icon. Nothing here touches pixels
//! or the filesystem; both backends derive their drawing from these values.

pub mod geometry;
pub mod palette;
pub mod size;

pub use geometry::{BadgeGeometry, BadgeRect, GlyphBounds};
pub use palette::{Palette, Rgb};
pub use size::IconSize;

/// Character drawn on the badge.
pub const DEFAULT_GLYPH: char = 'P';
