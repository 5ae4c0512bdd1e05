use crate::font::{Font, StandardFont, TrueTypeFont};
use crate::PDFError;
use std::path::{Path, PathBuf};

/// A font given as a [Font], the name of a standard font (`"Times-Bold"`), or the
/// path of a TrueType / OpenType file
#[derive(Debug, Clone, PartialEq)]
pub enum FontArg {
    Font(Font),
    Name(String),
    Path(PathBuf),
}

impl From<Font> for FontArg {
    fn from(font: Font) -> Self {
        FontArg::Font(font)
    }
}

impl From<StandardFont> for FontArg {
    fn from(font: StandardFont) -> Self {
        FontArg::Font(Font::Standard(font))
    }
}

impl From<TrueTypeFont> for FontArg {
    fn from(font: TrueTypeFont) -> Self {
        FontArg::Font(font.into())
    }
}

impl From<&str> for FontArg {
    fn from(name: &str) -> Self {
        FontArg::Name(name.to_string())
    }
}

impl From<String> for FontArg {
    fn from(name: String) -> Self {
        FontArg::Name(name)
    }
}

impl From<&Path> for FontArg {
    fn from(path: &Path) -> Self {
        FontArg::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for FontArg {
    fn from(path: PathBuf) -> Self {
        FontArg::Path(path)
    }
}

/// Resolve a font. Strings naming a standard font (ignoring case) select it; any
/// other string is treated as a path and the font file is loaded from disk.
pub fn normalize_font<F: Into<FontArg>>(value: F) -> Result<Font, PDFError> {
    match value.into() {
        FontArg::Font(font) => Ok(font),
        FontArg::Name(name) => match StandardFont::from_name(name.trim()) {
            Some(font) => Ok(Font::Standard(font)),
            None => Font::from_file(name),
        },
        FontArg::Path(path) => Font::from_file(path),
    }
}
