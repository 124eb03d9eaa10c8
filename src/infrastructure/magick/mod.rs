// SPDX-License-Identifier: MPL-2.0
//! ImageMagick subprocess backend.
//!
//! Used when the native rasterizer is not compiled in. It draws the 128px
//! icon with one `convert` call and produces every other size by resizing
//! that file. There is no shadow layer and the letter is not re-scaled per
//! size, so the output only approximates the native one.
//!
//! # Commands
//!
//! ```text
//! convert -size 128x128 xc:none -fill #d32f2f \
//!     -draw "roundrectangle 8,8 120,120 12,12" \
//!     -fill white -pointsize 80 -gravity center -annotate +0+0 P icon128.png
//! convert icon128.png -resize 48x48 icon48.png
//! ```

use crate::application::port::{IconJob, IconRenderer, RenderedIcon};
use crate::domain::icon::IconSize;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Default name of the ImageMagick binary.
pub const DEFAULT_PROGRAM: &str = "convert";

/// Rounded rectangle for the 128px base icon: corners (8,8)-(120,120), radius 12.
const BASE_ROUNDRECT: &str = "roundrectangle 8,8 120,120 12,12";

/// Point size of the letter in the 128px base icon.
const BASE_POINTSIZE: u32 = 80;

/// Subprocess backend.
#[derive(Debug, Clone)]
pub struct MagickRenderer {
    program: String,
}

impl MagickRenderer {
    /// Backend name reported by [`IconRenderer::name`].
    pub const NAME: &'static str = "imagemagick";

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments that draw the base icon.
    #[must_use]
    pub fn draw_args(job: &IconJob) -> Vec<String> {
        let base = IconSize::FALLBACK_BASE;
        vec![
            "-size".to_string(),
            base.to_string(),
            "xc:none".to_string(),
            "-fill".to_string(),
            job.palette.primary.magick_color(),
            "-draw".to_string(),
            BASE_ROUNDRECT.to_string(),
            "-fill".to_string(),
            job.palette.glyph.magick_color(),
            "-pointsize".to_string(),
            BASE_POINTSIZE.to_string(),
            "-gravity".to_string(),
            "center".to_string(),
            "-annotate".to_string(),
            "+0+0".to_string(),
            job.glyph.to_string(),
            base.file_name(),
        ]
    }

    /// Arguments that derive `size` from the base icon.
    #[must_use]
    pub fn resize_args(size: IconSize) -> Vec<String> {
        vec![
            IconSize::FALLBACK_BASE.file_name(),
            "-resize".to_string(),
            size.to_string(),
            size.file_name(),
        ]
    }

    /// Runs the tool with `output_dir` as its working directory.
    ///
    /// Only a failure to start the tool is an error. A non-zero exit is
    /// logged and the run carries on with the next command.
    fn run(&self, args: &[String], output_dir: &Path) -> Result<()> {
        debug!(program = %self.program, ?args, "Running image tool");
        let status = Command::new(&self.program)
            .args(args)
            .current_dir(output_dir)
            .status()
            .map_err(|e| Error::Tool {
                program: self.program.clone(),
                detail: format!("Failed to run: {}", e),
            })?;

        if !status.success() {
            warn!(program = %self.program, %status, ?args, "Image tool reported failure");
        }
        Ok(())
    }
}

impl IconRenderer for MagickRenderer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render_all(&self, job: &IconJob) -> Result<Vec<RenderedIcon>> {
        let base = IconSize::FALLBACK_BASE;
        self.run(&Self::draw_args(job), &job.output_dir)?;

        let mut rendered = Vec::with_capacity(job.sizes.len().max(1));
        rendered.push(RenderedIcon::new(base, &job.output_path(base)));

        for &size in job.sizes.iter().filter(|&&s| s != base) {
            self.run(&Self::resize_args(size), &job.output_dir)?;
            rendered.push(RenderedIcon::new(size, &job.output_path(size)));
        }

        debug!(files = rendered.len(), "ImageMagick run finished");
        Ok(rendered)
    }
}
