// SPDX-License-Identifier: MPL-2.0
//! Domain layer - icon values and layout rules with no external dependencies.
//!
//! # Modules
//!
//! - [`icon`]: Icon types ([`IconSize`](icon::IconSize), [`Palette`](icon::Palette),
//!   [`BadgeGeometry`](icon::BadgeGeometry), [`GlyphBounds`](icon::GlyphBounds))

pub mod icon;
