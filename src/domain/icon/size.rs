// SPDX-License-Identifier: MPL-2.0
//! Icon side lengths and the per-size derived values.

use std::fmt;

// =============================================================================
// IconSize
// =============================================================================

/// Side length of a square icon, in pixels. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(u32);

impl IconSize {
    /// Sizes generated by default, largest first.
    pub const DEFAULT_SEQUENCE: [IconSize; 4] = [
        IconSize(128),
        IconSize(48),
        IconSize(32),
        IconSize(16),
    ];

    /// The size drawn directly by the subprocess backend; every other size
    /// is resized from it.
    pub const FALLBACK_BASE: IconSize = IconSize(128);

    /// Creates a size, rejecting zero.
    #[must_use]
    pub fn new(side: u32) -> Option<Self> {
        (side > 0).then_some(Self(side))
    }

    /// Returns the side length in pixels.
    #[must_use]
    pub fn side(self) -> u32 {
        self.0
    }

    /// Font size in pixels per em: 60% of the side, rounded half up.
    #[must_use]
    pub fn font_px(self) -> u32 {
        (self.0 * 6 + 5) / 10
    }

    /// Output file name, e.g. `icon128.png`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("icon{}.png", self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
