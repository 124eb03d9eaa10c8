// SPDX-License-Identifier: MPL-2.0
//! In-process rasterizer built on `tiny-skia` and `ttf-parser`.
//!
//! Every size is drawn from scratch: shadow rectangle, face rectangle, then
//! the letter scaled to 60% of the side.

pub mod bitmap_font;
pub mod canvas;
pub mod font;

pub use canvas::Canvas;
pub use font::GlyphFont;

use crate::application::port::{IconJob, IconRenderer, RenderedIcon};
use crate::domain::icon::{BadgeGeometry, IconSize, Palette};
use crate::error::Result;
use tracing::debug;

/// Native backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterRenderer;

impl RasterRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Draws one icon into a fresh canvas.
    pub fn render_icon(
        size: IconSize,
        palette: &Palette,
        glyph: char,
        font: &GlyphFont,
    ) -> Result<Canvas> {
        let geometry = BadgeGeometry::for_size(size);
        let mut canvas = Canvas::new(size)?;

        canvas.fill_rounded_rect(geometry.shadow_rect(), geometry.corner_radius, palette.shadow)?;
        canvas.fill_rounded_rect(geometry.face_rect(), geometry.corner_radius, palette.primary)?;
        font.draw_centered(&mut canvas, glyph, size, palette.glyph)?;

        Ok(canvas)
    }
}

impl IconRenderer for RasterRenderer {
    fn name(&self) -> &'static str {
        "tiny-skia"
    }

    fn render_all(&self, job: &IconJob) -> Result<Vec<RenderedIcon>> {
        let font = GlyphFont::load(&job.font_paths);
        let mut rendered = Vec::with_capacity(job.sizes.len());

        for &size in &job.sizes {
            let canvas = Self::render_icon(size, &job.palette, job.glyph, &font)?;
            let path = job.output_path(size);
            canvas.save_png(&path)?;
            debug!(path = %path.display(), "Wrote {}", size);
            rendered.push(RenderedIcon::new(size, &path));
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::icon::DEFAULT_GLYPH;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn job_in(dir: PathBuf) -> IconJob {
        IconJob {
            output_dir: dir,
            sizes: IconSize::DEFAULT_SEQUENCE.to_vec(),
            palette: Palette::default(),
            glyph: DEFAULT_GLYPH,
            font_paths: vec![PathBuf::from("/nonexistent/DejaVuSans-Bold.ttf")],
        }
    }

    #[test]
    fn shadow_sits_below_and_right_of_face() {
        let size = IconSize::FALLBACK_BASE;
        let canvas = RasterRenderer::render_icon(size, &Palette::default(), 'P', &GlyphFont::Builtin)
            .expect("render");

        // Face spans 8..=120, shadow 12..=124.
        assert_eq!(canvas.pixel(10, 64), Some([211, 47, 47, 255]));
        assert_eq!(canvas.pixel(122, 64), Some([183, 28, 28, 255]));
        assert_eq!(canvas.pixel(64, 122), Some([183, 28, 28, 255]));
        assert_eq!(canvas.pixel(2, 2).map(|p| p[3]), Some(0));
        assert_eq!(canvas.pixel(64, 126).map(|p| p[3]), Some(0));
    }

    #[test]
    fn builtin_letter_is_painted_in_glyph_color() {
        let size = IconSize::new(16).expect("non-zero size");
        let canvas = RasterRenderer::render_icon(size, &Palette::default(), 'P', &GlyphFont::Builtin)
            .expect("render");
        assert_eq!(canvas.pixel(5, 4), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(9, 4), Some([211, 47, 47, 255]));
    }

    #[test]
    fn render_all_writes_every_size_with_missing_fonts() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let job = job_in(temp_dir.path().to_path_buf());

        let rendered = RasterRenderer::new().render_all(&job).expect("render all");

        assert_eq!(rendered.len(), 4);
        for icon in &rendered {
            let decoded = image_rs::open(&icon.path).expect("decode").to_rgba8();
            assert_eq!(decoded.dimensions(), (icon.size.side(), icon.size.side()));
        }
    }

    #[test]
    fn rerendering_produces_identical_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let job = job_in(temp_dir.path().to_path_buf());
        let renderer = RasterRenderer::new();

        renderer.render_all(&job).expect("first run");
        let first = fs::read(job.output_path(IconSize::FALLBACK_BASE)).expect("read first");
        renderer.render_all(&job).expect("second run");
        let second = fs::read(job.output_path(IconSize::FALLBACK_BASE)).expect("read second");

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_builtin_glyph_fails_the_run() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut job = job_in(temp_dir.path().to_path_buf());
        job.glyph = '~';

        assert!(RasterRenderer::new().render_all(&job).is_err());
    }
}
