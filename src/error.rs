// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Font(FontError),
    Render(String),
    /// The external image tool could not be spawned or exited unsuccessfully.
    Tool { program: String, detail: String },
    Config(String),
}

/// Font loading and glyph lookup failures.
///
/// `NotFound` and `Parse` are recoverable: the raster backend substitutes
/// the built-in bitmap font when it sees either of them.
#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    /// None of the candidate font files could be read.
    NotFound { tried: Vec<PathBuf> },

    /// A font file was read but is not a usable TrueType/OpenType face.
    Parse { path: PathBuf, reason: String },

    /// The selected font has no outline for the requested character.
    MissingGlyph(char),
}

impl FontError {
    /// Returns true when falling back to the built-in font is appropriate.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FontError::NotFound { .. } | FontError::Parse { .. })
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::NotFound { tried } => {
                let paths: Vec<String> = tried.iter().map(|p| p.display().to_string()).collect();
                write!(f, "No font found (tried: {})", paths.join(", "))
            }
            FontError::Parse { path, reason } => {
                write!(f, "Invalid font file {}: {}", path.display(), reason)
            }
            FontError::MissingGlyph(ch) => write!(f, "Font has no glyph for {ch:?}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Font(e) => write!(f, "Font Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
            Error::Tool { program, detail } => write!(f, "Tool Error ({}): {}", program, detail),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FontError> for Error {
    fn from(err: FontError) -> Self {
        Error::Font(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
