// SPDX-License-Identifier: MPL-2.0
//! Square RGBA drawing surface backed by a `tiny_skia::Pixmap`.

use crate::domain::icon::{BadgeRect, IconSize, Rgb};
use crate::error::{Error, Result};
use image_rs::{ImageFormat, RgbaImage};
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_75;

/// In-memory icon before it is written to disk. Starts fully transparent.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent `size` x `size` canvas.
    pub fn new(size: IconSize) -> Result<Self> {
        let pixmap = Pixmap::new(size.side(), size.side())
            .ok_or_else(|| Error::Render(format!("Failed to allocate {size} canvas")))?;
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn side(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fills a rounded rectangle. `rect` bounds are inclusive pixel
    /// coordinates, so the filled area spans `left..right + 1`.
    pub fn fill_rounded_rect(&mut self, rect: BadgeRect, radius: i32, color: Rgb) -> Result<()> {
        let path = rounded_rect_path(
            rect.left as f32,
            rect.top as f32,
            (rect.right + 1) as f32,
            (rect.bottom + 1) as f32,
            rect.clamp_radius(radius),
        )
        .ok_or_else(|| Error::Render(format!("Degenerate rectangle {rect:?}")))?;

        self.fill_path(&path, color, Transform::identity());
        Ok(())
    }

    /// Fills an arbitrary path with anti-aliasing.
    pub fn fill_path(&mut self, path: &tiny_skia::Path, color: Rgb, transform: Transform) {
        let paint = solid_paint(color, true);
        self.pixmap.fill_path(path, &paint, FillRule::Winding, transform, None);
    }

    /// Paints a single pixel. Coordinates off the canvas are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.side() as i32 || y >= self.side() as i32 {
            return;
        }
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, 1.0, 1.0) {
            let paint = solid_paint(color, false);
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    /// Straight (non-premultiplied) RGBA value at (x, y).
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Converts to an `image` buffer, un-premultiplying every pixel.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let mut raw = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            raw.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        RgbaImage::from_raw(self.side(), self.side(), raw)
            .ok_or_else(|| Error::Image("Pixel buffer does not match canvas size".into()))
    }

    /// Writes the canvas as PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgba_image()?.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

fn solid_paint(color: Rgb, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = anti_alias;
    paint
}

/// Rectangle path with circular corners of `radius`, clockwise from the top edge.
fn rounded_rect_path(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
) -> Option<tiny_skia::Path> {
    if radius <= 0.0 {
        return Some(PathBuilder::from_rect(Rect::from_ltrb(left, top, right, bottom)?));
    }

    let k = radius * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(left + radius, top);
    pb.line_to(right - radius, top);
    pb.cubic_to(right - radius + k, top, right, top + radius - k, right, top + radius);
    pb.line_to(right, bottom - radius);
    pb.cubic_to(right, bottom - radius + k, right - radius + k, bottom, right - radius, bottom);
    pb.line_to(left + radius, bottom);
    pb.cubic_to(left + radius - k, bottom, left, bottom - radius + k, left, bottom - radius);
    pb.line_to(left, top + radius);
    pb.cubic_to(left, top + radius - k, left + radius - k, top, left + radius, top);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::icon::Palette;
    use tempfile::tempdir;

    fn canvas(side: u32) -> Canvas {
        Canvas::new(IconSize::new(side).expect("non-zero size")).expect("canvas allocation")
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = canvas(16);
        assert_eq!(canvas.side(), 16);
        assert!(canvas
            .to_rgba_image()
            .expect("conversion")
            .pixels()
            .all(|p| p.0[3] == 0));
    }

    #[test]
    fn rounded_rect_fills_interior_and_cuts_corners() {
        let mut canvas = canvas(32);
        let rect = BadgeRect { left: 2, top: 2, right: 29, bottom: 29 };
        let red = Palette::default().primary;
        canvas.fill_rounded_rect(rect, 8, red).expect("fill");

        assert_eq!(canvas.pixel(16, 16), Some([211, 47, 47, 255]));
        // Right and bottom bounds are inclusive.
        assert_eq!(canvas.pixel(29, 16), Some([211, 47, 47, 255]));
        assert_eq!(canvas.pixel(30, 16).map(|p| p[3]), Some(0));
        // The corner pixel sits outside the arc.
        assert_eq!(canvas.pixel(2, 2).map(|p| p[3]), Some(0));
    }

    #[test]
    fn zero_radius_fills_square_corners() {
        let mut canvas = canvas(8);
        let rect = BadgeRect { left: 1, top: 1, right: 6, bottom: 6 };
        canvas.fill_rounded_rect(rect, 0, Rgb::WHITE).expect("fill");
        assert_eq!(canvas.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 0).map(|p| p[3]), Some(0));
    }

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut canvas = canvas(4);
        canvas.put_pixel(-1, 0, Rgb::WHITE);
        canvas.put_pixel(4, 4, Rgb::WHITE);
        canvas.put_pixel(3, 0, Rgb::WHITE);
        assert_eq!(canvas.pixel(3, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 0).map(|p| p[3]), Some(0));
    }

    #[test]
    fn save_png_writes_decodable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("icon4.png");
        let mut canvas = canvas(4);
        canvas.put_pixel(1, 1, Rgb::new(10, 20, 30));
        canvas.save_png(&path).expect("save");

        let decoded = image_rs::open(&path).expect("decode").to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(1, 1).0, [10, 20, 30, 255]);
    }
}
