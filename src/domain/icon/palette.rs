// SPDX-License-Identifier: MPL-2.0
//! Badge colors.

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Color argument for ImageMagick's `-fill`.
    #[must_use]
    pub fn magick_color(self) -> String {
        if self == Self::WHITE {
            "white".to_string()
        } else {
            self.hex()
        }
    }
}

/// The three badge colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Foreground rounded rectangle.
    pub primary: Rgb,
    /// Drop shadow behind the foreground rectangle.
    pub shadow: Rgb,
    /// The letter.
    pub glyph: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb::new(211, 47, 47),
            shadow: Rgb::new(183, 28, 28),
            glyph: Rgb::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_hex_values() {
        let palette = Palette::default();
        assert_eq!(palette.primary.hex(), "#d32f2f");
        assert_eq!(palette.shadow.hex(), "#b71c1c");
        assert_eq!(palette.glyph.hex(), "#ffffff");
    }

    #[test]
    fn magick_color_names_white() {
        assert_eq!(Rgb::WHITE.magick_color(), "white");
        assert_eq!(Palette::default().primary.magick_color(), "#d32f2f");
    }
}
