// SPDX-License-Identifier: MPL-2.0
//! Post-write inspection of generated icons.

use crate::domain::icon::IconSize;
use crate::error::Result;
use std::path::Path;

/// What a written icon file decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    /// Pixels with alpha 255.
    pub opaque_pixels: usize,
}

impl IconReport {
    /// Square of the expected side, with an alpha channel.
    #[must_use]
    pub fn matches(&self, size: IconSize) -> bool {
        self.width == size.side() && self.height == size.side() && self.has_alpha
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.opaque_pixels == 0
    }
}

/// Decodes the icon at `path` and summarizes it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn inspect_icon(path: &Path) -> Result<IconReport> {
    let image = image_rs::open(path)?;
    let has_alpha = image.color().has_alpha();
    let rgba = image.to_rgba8();
    let opaque_pixels = rgba.pixels().filter(|p| p.0[3] == u8::MAX).count();

    Ok(IconReport {
        width: rgba.width(),
        height: rgba.height(),
        has_alpha,
        opaque_pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn reports_opaque_pixel_count() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("icon4.png");
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 1, Rgba([211, 47, 47, 255]));
        image.put_pixel(2, 2, Rgba([211, 47, 47, 128]));
        image.save(&path).expect("write png");

        let report = inspect_icon(&path).expect("inspect");
        assert_eq!(report.opaque_pixels, 1);
        assert!(report.matches(IconSize::new(4).expect("non-zero size")));
        assert!(!report.is_blank());
    }

    #[test]
    fn rgb_file_does_not_match() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("icon4.png");
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]))
            .save(&path)
            .expect("write png");

        let report = inspect_icon(&path).expect("inspect");
        assert!(!report.has_alpha);
        assert!(!report.matches(IconSize::new(4).expect("non-zero size")));
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("icon4.png");
        std::fs::write(&path, b"not a png").expect("write");
        assert!(inspect_icon(&path).is_err());
    }
}
