//! Fonts used to draw text.
//!
//! A [Font] is either one of the fourteen [StandardFont]s every PDF reader ships
//! with, or a [TrueTypeFont] that gets embedded into the document. Fonts are cheap
//! to clone; embedded fonts are shared behind an [Arc].

mod standard;
mod truetype;
mod widths;

pub use standard::StandardFont;
pub use truetype::TrueTypeFont;

use crate::refs::{ObjectReferences, RefType};
use crate::{PDFError, Pt};
use pdf_writer::{Name, Pdf};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Font {
    Standard(StandardFont),
    TrueType(Arc<TrueTypeFont>),
}

impl Default for Font {
    fn default() -> Self {
        Font::Standard(StandardFont::Helvetica)
    }
}

/// Embedded fonts compare equal when they share storage or were parsed from
/// identical bytes
impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Font::Standard(a), Font::Standard(b)) => a == b,
            (Font::TrueType(a), Font::TrueType(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

impl From<TrueTypeFont> for Font {
    fn from(font: TrueTypeFont) -> Self {
        Font::TrueType(Arc::new(font))
    }
}

impl From<Arc<TrueTypeFont>> for Font {
    fn from(font: Arc<TrueTypeFont>) -> Self {
        Font::TrueType(font)
    }
}

impl Font {
    /// Parse a font from raw TrueType / OpenType bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        TrueTypeFont::load(bytes).map(Font::from)
    }

    /// Read and parse a TrueType / OpenType font file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, PDFError> {
        TrueTypeFont::from_file(path).map(Font::from)
    }

    /// A human readable name for the font
    pub fn name(&self) -> String {
        match self {
            Font::Standard(font) => font.base_font_name().to_string(),
            Font::TrueType(font) => font.name().unwrap_or_else(|| "embedded font".to_string()),
        }
    }

    pub fn ascent(&self, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.ascent(size),
            Font::TrueType(font) => font.ascent(size),
        }
    }

    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.descent(size),
            Font::TrueType(font) => font.descent(size),
        }
    }

    /// Distance between the baselines of two consecutive lines of text
    pub fn line_height(&self, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.line_height(size),
            Font::TrueType(font) => font.line_height(size),
        }
    }

    pub fn char_width(&self, ch: char, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.char_width(ch, size),
            Font::TrueType(font) => font.char_width(ch, size),
        }
    }

    /// Calculate the width of a given string of text at the given font size.
    /// Newlines don't take up any room.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        text.chars()
            .filter(|&ch| ch != '\n')
            .map(|ch| self.char_width(ch, size))
            .sum()
    }

    /// Encode text as the string operand of a `Tj` operator
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(font) => font.encode(text),
            Font::TrueType(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => {
                let id = refs.gen(RefType::Font(font_index));
                let mut type1 = writer.type1_font(id);
                type1.base_font(Name(font.base_font_name().as_bytes()));
                if !font.is_symbolic() {
                    type1.encoding_predefined(Name(b"WinAnsiEncoding"));
                }
            }
            Font::TrueType(font) => font.write(refs, font_index, writer),
        }
    }
}
