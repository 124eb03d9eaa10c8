// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the icon generator.

use std::path::PathBuf;

// ==========================================================================
// Output Defaults
// ==========================================================================

/// Directory name the icons are written into.
pub const OUTPUT_DIR_NAME: &str = "icons";

/// Default output directory: `icons/` beside the crate manifest.
#[must_use]
pub fn output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_DIR_NAME)
}

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Bold sans-serif font locations, tried in order (Arch layout first, then Debian).
pub const FONT_PATHS: [&str; 2] = [
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

#[must_use]
pub fn font_paths() -> Vec<PathBuf> {
    FONT_PATHS.iter().map(PathBuf::from).collect()
}
