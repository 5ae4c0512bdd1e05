use super::widths;
use crate::units::Pt;

/// The fonts every PDF reader is required to provide. These are never embedded in
/// the document, which keeps files small, but they only cover the `WinAnsiEncoding`
/// character set (Symbol and ZapfDingbats use their own built-in encodings).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Symbol,
    ZapfDingbats,
}

/// Accepted spellings of each standard font, lower-cased. The first spelling of
/// each entry is the hyphenated family-weight-style form; the rest are the
/// PostScript names.
const NAMES: &[(&str, StandardFont)] = &[
    ("courier", StandardFont::Courier),
    ("courier-bold", StandardFont::CourierBold),
    ("courier-oblique", StandardFont::CourierOblique),
    ("courier-bold-oblique", StandardFont::CourierBoldOblique),
    ("courier-boldoblique", StandardFont::CourierBoldOblique),
    ("helvetica", StandardFont::Helvetica),
    ("helvetica-bold", StandardFont::HelveticaBold),
    ("helvetica-oblique", StandardFont::HelveticaOblique),
    ("helvetica-bold-oblique", StandardFont::HelveticaBoldOblique),
    ("helvetica-boldoblique", StandardFont::HelveticaBoldOblique),
    ("times-roman", StandardFont::TimesRoman),
    ("times-bold", StandardFont::TimesBold),
    ("times-oblique", StandardFont::TimesItalic),
    ("times-italic", StandardFont::TimesItalic),
    ("times-bold-oblique", StandardFont::TimesBoldItalic),
    ("times-bolditalic", StandardFont::TimesBoldItalic),
    ("symbol", StandardFont::Symbol),
    ("zapfdingbats", StandardFont::ZapfDingbats),
];

impl StandardFont {
    /// Find a standard font by name, ignoring case. Both `"times-bold-oblique"` and
    /// the PostScript name `"Times-BoldItalic"` are understood.
    pub fn from_name(name: &str) -> Option<StandardFont> {
        let name = name.to_lowercase();
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, font)| font)
    }

    /// The PostScript name of the font, as written into the `BaseFont` entry
    pub fn base_font_name(&self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Symbolic fonts have their own encoding and mustn't be given `WinAnsiEncoding`
    pub fn is_symbolic(&self) -> bool {
        matches!(self, StandardFont::Symbol | StandardFont::ZapfDingbats)
    }

    /// Ascender and descender, in thousandths of an em
    fn vertical_metrics(&self) -> (i16, i16) {
        match self {
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => (629, -157),
            StandardFont::Helvetica
            | StandardFont::HelveticaBold
            | StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique => (718, -207),
            StandardFont::TimesRoman
            | StandardFont::TimesBold
            | StandardFont::TimesItalic
            | StandardFont::TimesBoldItalic => (683, -217),
            StandardFont::Symbol => (1010, -293),
            StandardFont::ZapfDingbats => (820, -143),
        }
    }

    /// Advance width of a character in thousandths of an em. Characters outside of
    /// printable ASCII get the width of `?`; Symbol and ZapfDingbats use a single
    /// average width.
    fn advance(&self, ch: char) -> u16 {
        let table = match self {
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => return 600,
            StandardFont::Symbol => return 550,
            StandardFont::ZapfDingbats => return 788,
            StandardFont::Helvetica | StandardFont::HelveticaOblique => &widths::HELVETICA,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => {
                &widths::HELVETICA_BOLD
            }
            StandardFont::TimesRoman => &widths::TIMES_ROMAN,
            StandardFont::TimesBold | StandardFont::TimesBoldItalic => &widths::TIMES_BOLD,
            StandardFont::TimesItalic => &widths::TIMES_ITALIC,
        };

        let index = match ch {
            ' '..='~' => ch as usize - ' ' as usize,
            _ => '?' as usize - ' ' as usize,
        };
        table[index]
    }

    pub fn ascent(&self, size: Pt) -> Pt {
        size * self.vertical_metrics().0 as f32 / 1000.0
    }

    /// Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * self.vertical_metrics().1 as f32 / 1000.0
    }

    /// The standard fonts don't specify a line gap; lines are set 1.2 em apart
    pub fn line_height(&self, size: Pt) -> Pt {
        size * 1.2
    }

    pub fn char_width(&self, ch: char, size: Pt) -> Pt {
        size * self.advance(ch) as f32 / 1000.0
    }

    /// Encode text as a PDF literal string. Only printable ASCII is kept, the range
    /// [Self::advance] has metrics for; everything else is replaced with `?`.
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::with_capacity(text.len() + 2);
        out.push(b'(');
        for ch in text.chars() {
            let byte = match ch as u32 {
                0x20..=0x7e => ch as u32 as u8,
                _ => b'?',
            };
            if matches!(byte, b'(' | b')' | b'\\') {
                out.push(b'\\');
            }
            out.push(byte);
        }
        out.push(b')');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            StandardFont::from_name("HELVETICA"),
            Some(StandardFont::Helvetica)
        );
        assert_eq!(
            StandardFont::from_name("times-bold-oblique"),
            Some(StandardFont::TimesBoldItalic)
        );
        assert_eq!(
            StandardFont::from_name("Times-BoldItalic"),
            Some(StandardFont::TimesBoldItalic)
        );
        assert_eq!(StandardFont::from_name("comic-sans"), None);
    }

    #[test]
    fn base_font_names_are_properly_cased() {
        let font = StandardFont::from_name("times-bold-oblique").unwrap();
        assert_eq!(font.base_font_name(), "Times-BoldItalic");
        let font = StandardFont::from_name("ZAPFDINGBATS").unwrap();
        assert_eq!(font.base_font_name(), "ZapfDingbats");
    }

    #[test]
    fn courier_is_monospaced() {
        let size = Pt(10.0);
        let f = StandardFont::Courier;
        assert_eq!(f.char_width('i', size), f.char_width('W', size));
        assert_eq!(f.char_width('i', size), Pt(6.0));
    }

    #[test]
    fn helvetica_widths() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.char_width(' ', Pt(1000.0)), Pt(278.0));
        assert_eq!(f.char_width('W', Pt(1000.0)), Pt(944.0));
        assert_eq!(f.char_width('~', Pt(1000.0)), Pt(584.0));
    }

    #[test]
    fn literal_strings_are_escaped() {
        let encoded = StandardFont::Helvetica.encode("a(b)\\c\u{263a}");
        assert_eq!(encoded, b"(a\\(b\\)\\\\c?)".to_vec());
    }

    #[test]
    fn encoding_matches_measuring() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.encode("caf\u{e9} \u{a9}"), b"(caf? ?)".to_vec());
        assert_eq!(f.char_width('\u{e9}', Pt(10.0)), f.char_width('?', Pt(10.0)));
    }
}
