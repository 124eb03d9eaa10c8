// SPDX-License-Identifier: MPL-2.0
//! Glyph fonts for the badge letter.
//!
//! A TrueType face is loaded from the first readable candidate path. When
//! none is usable the built-in bitmap font takes over, so rendering never
//! fails for lack of a font file.

use super::bitmap_font;
use super::canvas::Canvas;
use crate::domain::icon::{GlyphBounds, IconSize, Rgb};
use crate::error::FontError;
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::{PathBuilder, Transform};
use tracing::{debug, warn};

// =============================================================================
// TrueTypeFont
// =============================================================================

/// Owned font file data. The face is re-parsed on use, which is cheap.
pub struct TrueTypeFont {
    path: PathBuf,
    data: Vec<u8>,
}

/// A glyph outline scaled to pixels, positioned relative to the draw origin.
pub struct ScaledGlyph {
    pub path: tiny_skia::Path,
    pub bounds: GlyphBounds,
}

impl TrueTypeFont {
    /// Validates `data` as a font face.
    pub fn from_bytes(path: &Path, data: Vec<u8>) -> Result<Self, FontError> {
        ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Loads the first candidate that reads and parses.
    ///
    /// # Errors
    ///
    /// Returns the last parse error if some file was read but none parsed,
    /// otherwise [`FontError::NotFound`].
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, FontError> {
        let mut parse_error = None;
        for path in candidates {
            match fs::read(path) {
                Ok(data) => match Self::from_bytes(path, data) {
                    Ok(font) => return Ok(font),
                    Err(err) => {
                        debug!(path = %path.display(), %err, "Skipping unusable font");
                        parse_error = Some(err);
                    }
                },
                Err(err) => debug!(path = %path.display(), %err, "Font not readable"),
            }
        }
        Err(parse_error.unwrap_or_else(|| FontError::NotFound {
            tried: candidates.to_vec(),
        }))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn face(&self) -> Result<ttf_parser::Face<'_>, FontError> {
        ttf_parser::Face::parse(&self.data, 0).map_err(|e| FontError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Outline of `ch` at `px` pixels per em. The origin is on the ascender
    /// line at the glyph's pen position, with y growing downwards.
    pub fn scaled_glyph(&self, ch: char, px: u32) -> Result<ScaledGlyph, FontError> {
        let face = self.face()?;
        let glyph_id = face.glyph_index(ch).ok_or(FontError::MissingGlyph(ch))?;

        let mut sink = OutlineSink {
            builder: PathBuilder::new(),
            scale: px as f32 / f32::from(face.units_per_em()),
            ascender: f32::from(face.ascender()),
        };
        let bbox = face
            .outline_glyph(glyph_id, &mut sink)
            .ok_or(FontError::MissingGlyph(ch))?;

        let bounds = GlyphBounds {
            left: (f32::from(bbox.x_min) * sink.scale).floor() as i32,
            top: ((sink.ascender - f32::from(bbox.y_max)) * sink.scale).floor() as i32,
            right: (f32::from(bbox.x_max) * sink.scale).ceil() as i32,
            bottom: ((sink.ascender - f32::from(bbox.y_min)) * sink.scale).ceil() as i32,
        };
        let path = sink.builder.finish().ok_or(FontError::MissingGlyph(ch))?;
        Ok(ScaledGlyph { path, bounds })
    }
}

/// Converts font-unit outline commands into a pixel-space path.
struct OutlineSink {
    builder: PathBuilder,
    scale: f32,
    ascender: f32,
}

impl OutlineSink {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale, (self.ascender - y) * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

// =============================================================================
// GlyphFont
// =============================================================================

/// The font actually used for a run.
pub enum GlyphFont {
    TrueType(TrueTypeFont),
    Builtin,
}

impl GlyphFont {
    /// Loads the first usable candidate, degrading to the built-in font.
    pub fn load(candidates: &[PathBuf]) -> Self {
        match TrueTypeFont::load_first(candidates) {
            Ok(font) => {
                debug!(path = %font.path().display(), "Loaded glyph font");
                GlyphFont::TrueType(font)
            }
            Err(err) => {
                warn!(%err, "Using built-in bitmap font");
                GlyphFont::Builtin
            }
        }
    }

    /// Draws `ch` centered on the canvas and returns the ink bounds used for
    /// centering.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::MissingGlyph`] if the font cannot draw `ch`.
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas,
        ch: char,
        size: IconSize,
        color: Rgb,
    ) -> Result<GlyphBounds, FontError> {
        match self {
            GlyphFont::TrueType(font) => {
                let glyph = font.scaled_glyph(ch, size.font_px())?;
                let (x, y) = glyph.bounds.centered_origin(size.side());
                canvas.fill_path(
                    &glyph.path,
                    color,
                    Transform::from_translate(x as f32, y as f32),
                );
                Ok(glyph.bounds)
            }
            GlyphFont::Builtin => {
                let rows = bitmap_font::rows(ch).ok_or(FontError::MissingGlyph(ch))?;
                let (x, y) = bitmap_font::BOUNDS.centered_origin(size.side());
                for (col, row) in bitmap_font::dots(rows) {
                    canvas.put_pixel(x + col, y + row, color);
                }
                Ok(bitmap_font::BOUNDS)
            }
        }
    }
}
