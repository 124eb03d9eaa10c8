// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`verify`]: Inspection of written icon files
//!
//! [`generate_icons`] is the single use case: pick a backend once, then let
//! it write the whole icon set.
//!
//! # Example
//!
//! ```no_run
//! use badge_icons::{application, config::Config};
//!
//! let generated = application::generate_icons(&Config::default()).expect("icons");
//! assert_eq!(generated.icons.len(), 4);
//! println!("{}", generated.summary());
//! ```

pub mod port;
pub mod verify;

use crate::config::{defaults, BackendPreference, Config};
use crate::domain::icon::{IconSize, Palette, DEFAULT_GLYPH};
use crate::error::Result;
use crate::infrastructure::magick::MagickRenderer;
use port::{IconJob, IconRenderer, RenderedIcon};
use std::fs;
use tracing::{info, warn};

/// Whether the in-process rasterizer was compiled in.
#[must_use]
pub fn native_available() -> bool {
    cfg!(feature = "native")
}

#[cfg(feature = "native")]
fn native_renderer() -> Option<Box<dyn IconRenderer>> {
    Some(Box::new(crate::infrastructure::raster::RasterRenderer::new()))
}

#[cfg(not(feature = "native"))]
fn native_renderer() -> Option<Box<dyn IconRenderer>> {
    None
}

/// Capability check: chooses the backend for the whole run.
///
/// A missing native backend is not an error; the run degrades to the
/// ImageMagick subprocess backend.
pub fn select_renderer(
    preference: BackendPreference,
    magick_program: &str,
) -> Box<dyn IconRenderer> {
    if preference != BackendPreference::Magick {
        if let Some(renderer) = native_renderer() {
            return renderer;
        }
        warn!("Native rasterizer not available. Using ImageMagick fallback...");
    }
    Box::new(MagickRenderer::new(magick_program))
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedIcons {
    /// Name of the backend that wrote the files.
    pub backend: &'static str,
    pub icons: Vec<RenderedIcon>,
}

impl GeneratedIcons {
    /// Whether the ImageMagick fallback produced the set.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.backend == MagickRenderer::NAME
    }

    /// Closing line printed after a run.
    #[must_use]
    pub fn summary(&self) -> &'static str {
        if self.used_fallback() {
            "Icons created using ImageMagick!"
        } else {
            "\nAll icons created successfully!"
        }
    }
}

/// Builds the job for the fixed icon set, writing into the configured
/// output directory.
#[must_use]
pub fn build_job(config: &Config) -> IconJob {
    IconJob {
        output_dir: config.resolved_output_dir(),
        sizes: IconSize::DEFAULT_SEQUENCE.to_vec(),
        palette: Palette::default(),
        glyph: DEFAULT_GLYPH,
        font_paths: defaults::font_paths(),
    }
}

/// Creates the output directory and renders every icon.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the backend fails.
/// Files written before the failure are left in place.
pub fn generate_icons(config: &Config) -> Result<GeneratedIcons> {
    let renderer = select_renderer(config.backend, &config.magick_program);
    run_job(&build_job(config), renderer.as_ref())
}

/// Runs `job` on an already selected backend.
///
/// # Errors
///
/// See [`generate_icons`].
pub fn run_job(job: &IconJob, renderer: &dyn IconRenderer) -> Result<GeneratedIcons> {
    fs::create_dir_all(&job.output_dir)?;

    info!(
        backend = renderer.name(),
        dir = %job.output_dir.display(),
        "Rendering {} icons",
        job.sizes.len()
    );
    let icons = renderer.render_all(job)?;
    Ok(GeneratedIcons {
        backend: renderer.name(),
        icons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn magick_preference_always_selects_subprocess_backend() {
        let renderer = select_renderer(BackendPreference::Magick, "convert");
        assert_eq!(renderer.name(), "imagemagick");
    }

    #[test]
    fn auto_selects_native_when_compiled_in() {
        let renderer = select_renderer(BackendPreference::Auto, "convert");
        let expected = if native_available() { "tiny-skia" } else { "imagemagick" };
        assert_eq!(renderer.name(), expected);
    }

    #[test]
    fn build_job_uses_configured_directory_and_fixed_icon_set() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/badge")),
            ..Config::default()
        };
        let job = build_job(&config);
        assert_eq!(job.output_dir, PathBuf::from("/tmp/badge"));
        assert_eq!(job.sizes, IconSize::DEFAULT_SEQUENCE);
        assert_eq!(job.glyph, 'P');
        assert_eq!(job.font_paths, defaults::font_paths());
        assert_eq!(job.palette, Palette::default());
    }

    #[test]
    fn summary_names_the_backend_used() {
        let native = GeneratedIcons {
            backend: "tiny-skia",
            icons: Vec::new(),
        };
        let fallback = GeneratedIcons {
            backend: MagickRenderer::NAME,
            icons: Vec::new(),
        };
        assert_eq!(native.summary(), "\nAll icons created successfully!");
        assert_eq!(fallback.summary(), "Icons created using ImageMagick!");
        assert!(fallback.used_fallback());
    }

    #[test]
    fn generate_icons_creates_missing_output_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let output_dir = temp_dir.path().join("nested").join("icons");
        let config = Config {
            output_dir: Some(output_dir.clone()),
            backend: BackendPreference::Magick,
            magick_program: "/nonexistent/bin/convert".into(),
            ..Config::default()
        };

        // The tool is missing, but the directory is created first.
        assert!(generate_icons(&config).is_err());
        assert!(output_dir.is_dir());
    }
}
