// SPDX-License-Identifier: MPL-2.0
//! `badge_icons` draws the rounded-badge application icons (a red rounded
//! rectangle with a white letter) at 128, 48, 32 and 16 pixels and writes
//! them as PNG files.
//!
//! Drawing happens in-process with `tiny-skia` when the `native` feature is
//! enabled; otherwise the icons are produced by ImageMagick.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub mod test_utils;
