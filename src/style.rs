use crate::colour::colours;
use crate::layout::Paragraph;
use crate::normalize::*;
use crate::{PDFError, Pt};

/// Paragraph styling in its loose form. Every setter takes anything the matching
/// normalizer accepts; nothing is validated until the style is applied with
/// [Paragraph::styled] (or [`Page::add`](crate::Page::add)), at which point the
/// first invalid argument is reported.
///
/// ```
/// use pdf_ergo::ParagraphStyle;
///
/// let mut style = ParagraphStyle::default();
/// style
///     .font("Courier")
///     .font_size(14)
///     .text_alignment("right")
///     .font_colour("red")
///     .border(true)
///     .padding((2, 4, 2, 4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub respect_newlines_in_text: bool,
    pub respect_spaces_in_text: bool,
    pub font: FontArg,
    pub font_size: Pt,
    pub text_alignment: AlignmentArg,
    /// Where the paragraph's box sits within the space it is given, i.e. `"bottom right"`
    pub alignment: AlignmentArg,
    pub font_colour: ColourArg,
    pub border: Broadcast<bool>,
    pub border_radius: Broadcast<Pt>,
    pub border_colour: ColourArg,
    pub border_width: Pt,
    pub padding: Broadcast<Pt>,
    pub margin: Option<Broadcast<Pt>>,
    pub fixed_leading: Option<Pt>,
    pub multiplied_leading: Option<f32>,
    pub background_colour: Option<ColourArg>,
    pub hyphenation: Option<HyphenationArg>,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        ParagraphStyle {
            respect_newlines_in_text: false,
            respect_spaces_in_text: false,
            font: FontArg::Name("Helvetica".to_string()),
            font_size: Pt(12.0),
            text_alignment: Alignment::Left.into(),
            alignment: Alignment::Top.into(),
            font_colour: colours::BLACK.into(),
            border: Broadcast::One(false),
            border_radius: Broadcast::One(Pt(0.0)),
            border_colour: colours::BLACK.into(),
            border_width: Pt(1.0),
            padding: Broadcast::One(Pt(0.0)),
            margin: None,
            fixed_leading: None,
            multiplied_leading: None,
            background_colour: None,
            hyphenation: None,
        }
    }
}

impl ParagraphStyle {
    pub fn new() -> ParagraphStyle {
        ParagraphStyle::default()
    }

    pub fn respect_newlines_in_text(&mut self, respect: bool) -> &mut Self {
        self.respect_newlines_in_text = respect;
        self
    }

    pub fn respect_spaces_in_text(&mut self, respect: bool) -> &mut Self {
        self.respect_spaces_in_text = respect;
        self
    }

    /// A standard font name, a font file path, or a loaded font
    pub fn font<F: Into<FontArg>>(&mut self, font: F) -> &mut Self {
        self.font = font.into();
        self
    }

    pub fn font_size<P: Into<Pt>>(&mut self, size: P) -> &mut Self {
        self.font_size = size.into();
        self
    }

    pub fn text_alignment<A: Into<AlignmentArg>>(&mut self, alignment: A) -> &mut Self {
        self.text_alignment = alignment.into();
        self
    }

    pub fn alignment<A: Into<AlignmentArg>>(&mut self, alignment: A) -> &mut Self {
        self.alignment = alignment.into();
        self
    }

    pub fn font_colour<C: Into<ColourArg>>(&mut self, colour: C) -> &mut Self {
        self.font_colour = colour.into();
        self
    }

    /// Which sides get a border: one flag for all of them, or (top, right, bottom, left)
    pub fn border<B: Into<Broadcast<bool>>>(&mut self, border: B) -> &mut Self {
        self.border = border.into();
        self
    }

    pub fn border_radius<B: Into<Broadcast<Pt>>>(&mut self, radius: B) -> &mut Self {
        self.border_radius = radius.into();
        self
    }

    pub fn border_colour<C: Into<ColourArg>>(&mut self, colour: C) -> &mut Self {
        self.border_colour = colour.into();
        self
    }

    pub fn border_width<P: Into<Pt>>(&mut self, width: P) -> &mut Self {
        self.border_width = width.into();
        self
    }

    pub fn padding<B: Into<Broadcast<Pt>>>(&mut self, padding: B) -> &mut Self {
        self.padding = padding.into();
        self
    }

    pub fn margin<B: Into<Broadcast<Pt>>>(&mut self, margin: B) -> &mut Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn fixed_leading<P: Into<Pt>>(&mut self, leading: P) -> &mut Self {
        self.fixed_leading = Some(leading.into());
        self
    }

    pub fn multiplied_leading(&mut self, factor: f32) -> &mut Self {
        self.multiplied_leading = Some(factor);
        self
    }

    pub fn background_colour<C: Into<ColourArg>>(&mut self, colour: C) -> &mut Self {
        self.background_colour = Some(colour.into());
        self
    }

    /// An ISO language code such as `"en-us"`, or a loaded dictionary
    pub fn hyphenation<H: Into<HyphenationArg>>(&mut self, hyphenation: H) -> &mut Self {
        self.hyphenation = Some(hyphenation.into());
        self
    }
}

impl Paragraph {
    /// Build a paragraph from loosely styled arguments, normalizing each of them
    pub fn styled<S: ToString>(text: S, style: &ParagraphStyle) -> Result<Paragraph, PDFError> {
        let (vertical_alignment, horizontal_alignment) = normalize_alignment(style.alignment.clone())?;

        Ok(Paragraph {
            text: text.to_string(),
            respect_newlines_in_text: style.respect_newlines_in_text,
            respect_spaces_in_text: style.respect_spaces_in_text,
            font: normalize_font(style.font.clone())?,
            font_size: style.font_size,
            text_alignment: normalize_text_alignment(style.text_alignment.clone())?,
            vertical_alignment,
            horizontal_alignment,
            font_colour: normalize_colour(style.font_colour.clone())?,
            border: normalize_sides(style.border),
            border_radius: normalize_corners(style.border_radius),
            border_colour: normalize_colour(style.border_colour.clone())?,
            border_width: style.border_width,
            padding: normalize_sides(style.padding),
            margin: normalize_margin(style.margin),
            fixed_leading: style.fixed_leading,
            multiplied_leading: style.multiplied_leading,
            background_colour: style
                .background_colour
                .clone()
                .map(normalize_colour)
                .transpose()?,
            hyphenation: style
                .hyphenation
                .clone()
                .map(normalize_hyphenation)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFont;
    use crate::layout::{Corners, HorizontalAlignment, Sides, TextAlignment, VerticalAlignment};
    use crate::{Colour, Font};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_style_matches_the_default_paragraph() {
        let styled = Paragraph::styled("text", &ParagraphStyle::default()).unwrap();
        assert_eq!(styled, Paragraph::new("text"));
    }

    #[test]
    fn loose_arguments_are_normalized() {
        let mut style = ParagraphStyle::new();
        style
            .font("courier")
            .font_size(14)
            .text_alignment("RIGHT")
            .alignment("bottom center")
            .font_colour("red")
            .border((true, false, true, false))
            .border_radius(5)
            .border_colour("#00ff00")
            .border_width(2.5)
            .padding((1, 2, 3, 4))
            .margin(6)
            .fixed_leading(3)
            .background_colour((0, 0, 255));

        let paragraph = Paragraph::styled("text", &style).unwrap();
        assert_eq!(paragraph.font, Font::Standard(StandardFont::Courier));
        assert_eq!(paragraph.font_size, Pt(14.0));
        assert_eq!(paragraph.text_alignment, TextAlignment::Right);
        assert_eq!(paragraph.vertical_alignment, VerticalAlignment::Bottom);
        assert_eq!(paragraph.horizontal_alignment, HorizontalAlignment::Centered);
        assert_eq!(paragraph.font_colour, Colour::new_rgb_bytes(255, 0, 0));
        assert_eq!(paragraph.border, Sides::trbl(true, false, true, false));
        assert_eq!(paragraph.border_radius, Corners::all(Pt(5.0)));
        assert_eq!(paragraph.border_colour, Colour::new_rgb_bytes(0, 255, 0));
        assert_eq!(paragraph.border_width, Pt(2.5));
        assert_eq!(paragraph.padding, Sides::trbl(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0)));
        assert_eq!(paragraph.margin, Sides::all(Some(Pt(6.0))));
        assert_eq!(paragraph.fixed_leading, Some(Pt(3.0)));
        assert_eq!(paragraph.background_colour, Some(Colour::new_rgb_bytes(0, 0, 255)));
        assert_eq!(paragraph.hyphenation, None);
    }

    #[test]
    fn first_invalid_argument_is_reported() {
        let mut style = ParagraphStyle::new();
        style.font_colour("not a colour");
        assert!(matches!(
            Paragraph::styled("text", &style),
            Err(PDFError::InvalidColour(_))
        ));

        let mut style = ParagraphStyle::new();
        style.text_alignment("sideways");
        assert!(matches!(
            Paragraph::styled("text", &style),
            Err(PDFError::InvalidArgument(_))
        ));

        let mut style = ParagraphStyle::new();
        style.hyphenation("klingon");
        assert!(matches!(
            Paragraph::styled("text", &style),
            Err(PDFError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn hyphenation_codes_load_dictionaries() {
        let mut style = ParagraphStyle::new();
        style.hyphenation("en-us");
        let paragraph = Paragraph::styled("text", &style).unwrap();
        assert_eq!(
            paragraph.hyphenation.map(|h| h.language_code().to_string()),
            Some("en-us".to_string())
        );
    }
}
