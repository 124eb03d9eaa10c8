// SPDX-License-Identifier: MPL-2.0
//! Badge layout: rectangle bounds, corner radius, shadow offset and glyph
//! centering. All values are integer pixels.

use super::IconSize;

// =============================================================================
// BadgeRect
// =============================================================================

/// Rectangle with inclusive pixel bounds: it covers columns `left..=right`
/// and rows `top..=bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BadgeRect {
    /// Number of covered columns.
    #[must_use]
    pub fn width(self) -> i32 {
        self.right - self.left + 1
    }

    /// Number of covered rows.
    #[must_use]
    pub fn height(self) -> i32 {
        self.bottom - self.top + 1
    }

    /// The same rectangle moved right and down by `delta`.
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        Self {
            left: self.left + delta,
            top: self.top + delta,
            right: self.right + delta,
            bottom: self.bottom + delta,
        }
    }

    /// Corner radius limited to half the shorter side.
    #[must_use]
    pub fn clamp_radius(self, radius: i32) -> f32 {
        let limit = self.width().min(self.height()) as f32 / 2.0;
        (radius as f32).min(limit).max(0.0)
    }
}

// =============================================================================
// BadgeGeometry
// =============================================================================

/// Per-size badge layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeGeometry {
    pub side: i32,
    pub margin: i32,
    pub corner_radius: i32,
    pub shadow_offset: i32,
}

impl BadgeGeometry {
    #[must_use]
    pub fn for_size(size: IconSize) -> Self {
        let side = size.side() as i32;
        Self {
            side,
            margin: (side / 16).max(2),
            corner_radius: (side / 8).max(4),
            shadow_offset: (side / 32).max(1),
        }
    }

    /// Foreground rectangle: `[margin, margin, side - margin, side - margin]`.
    #[must_use]
    pub fn face_rect(self) -> BadgeRect {
        BadgeRect {
            left: self.margin,
            top: self.margin,
            right: self.side - self.margin,
            bottom: self.side - self.margin,
        }
    }

    /// Shadow rectangle: the face moved down-right by the shadow offset.
    #[must_use]
    pub fn shadow_rect(self) -> BadgeRect {
        self.face_rect().offset(self.shadow_offset)
    }
}

// =============================================================================
// GlyphBounds
// =============================================================================

/// Ink bounds of a glyph relative to its draw origin.
///
/// The origin sits on the font's ascender line, so `top` is the distance
/// from the ascender down to the top of the ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphBounds {
    #[must_use]
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Draw origin that centers the ink box vertically on a `side`-pixel
    /// canvas. Horizontally the box width is centered but the left bearing
    /// is kept, so glyphs with a bearing sit slightly right of center.
    #[must_use]
    pub fn centered_origin(self, side: u32) -> (i32, i32) {
        let side = side as i32;
        let x = (side - self.width()).div_euclid(2);
        let y = (side - self.height()).div_euclid(2) - self.top;
        (x, y)
    }
}
