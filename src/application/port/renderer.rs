// SPDX-License-Identifier: MPL-2.0
//! Icon rendering port definition.
//!
//! This module defines the [`IconRenderer`] trait implemented by the native
//! rasterizer and by the ImageMagick subprocess backend.
//!
//! # Design Notes
//!
//! - One call renders the whole icon set; the subprocess backend needs the
//!   full set because it derives small sizes from the large one
//! - Implementations write into [`IconJob::output_dir`] and never change the
//!   process working directory

use crate::domain::icon::{IconSize, Palette};
use crate::error::Result;
use std::path::{Path, PathBuf};

// =============================================================================
// IconJob
// =============================================================================

/// Everything a backend needs to produce an icon set.
#[derive(Debug, Clone)]
pub struct IconJob {
    /// Directory receiving `icon{S}.png` files. Must already exist.
    pub output_dir: PathBuf,

    /// Sizes to produce, in order.
    pub sizes: Vec<IconSize>,

    pub palette: Palette,

    /// Character drawn on the badge.
    pub glyph: char,

    /// Candidate font files, tried in order.
    pub font_paths: Vec<PathBuf>,
}

impl IconJob {
    /// Path of the file a given size is written to.
    #[must_use]
    pub fn output_path(&self, size: IconSize) -> PathBuf {
        self.output_dir.join(size.file_name())
    }
}

// =============================================================================
// RenderedIcon
// =============================================================================

/// A file written by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub size: IconSize,
    pub path: PathBuf,
}

impl RenderedIcon {
    #[must_use]
    pub fn new(size: IconSize, path: &Path) -> Self {
        Self {
            size,
            path: path.to_path_buf(),
        }
    }
}

// =============================================================================
// IconRenderer Trait
// =============================================================================

/// A backend able to produce the full icon set for a job.
///
/// # Example
///
/// ```ignore
/// fn render_with(renderer: &dyn IconRenderer, job: &IconJob) -> Result<usize> {
///     Ok(renderer.render_all(job)?.len())
/// }
/// ```
pub trait IconRenderer {
    /// Short backend name used in log output.
    fn name(&self) -> &'static str;

    /// Renders every size in `job.sizes` and returns the written files.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing, encoding, writing or invoking an external
    /// tool fails. Partially written sets are left on disk.
    fn render_all(&self, job: &IconJob) -> Result<Vec<RenderedIcon>>;
}
