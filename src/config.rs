//! Paragraph styles and whole pages described as plain data, i.e. loaded from
//! JSON. Every field is optional; missing fields keep the defaults of
//! [ParagraphStyle].
//!
//! ```
//! use pdf_ergo::config::PageConfig;
//!
//! let config: PageConfig = serde_json::from_str(r##"{
//!     "size": "A4",
//!     "paragraphs": [
//!         { "text": "Title", "font": "Helvetica-Bold", "font_size": 18 },
//!         { "text": "Body text", "padding": [2, 4, 2, 4], "font_colour": "#333333" }
//!     ]
//! }"##).unwrap();
//! let page = config.build().unwrap();
//! ```

use crate::normalize::{Broadcast, ColourArg};
use crate::{PDFError, Page, ParagraphStyle, Pt};
use serde::Deserialize;

/// Either one value for all four sides / corners or a list of four
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrFour<T> {
    One(T),
    Four([T; 4]),
}

impl<T> From<OneOrFour<T>> for Broadcast<T> {
    fn from(value: OneOrFour<T>) -> Self {
        match value {
            OneOrFour::One(value) => Broadcast::One(value),
            OneOrFour::Four(values) => values.into(),
        }
    }
}

/// A colour name, a hex string or a list of `[r, g, b]` components
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColourConfig {
    Text(String),
    Components(Vec<i64>),
}

impl From<ColourConfig> for ColourArg {
    fn from(value: ColourConfig) -> Self {
        match value {
            ColourConfig::Text(text) => ColourArg::Text(text),
            ColourConfig::Components(components) => ColourArg::Components(components),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParagraphConfig {
    pub respect_newlines_in_text: Option<bool>,
    pub respect_spaces_in_text: Option<bool>,
    /// A standard font name or a font file path
    pub font: Option<String>,
    pub font_size: Option<Pt>,
    pub text_alignment: Option<String>,
    pub alignment: Option<String>,
    #[serde(alias = "font_color")]
    pub font_colour: Option<ColourConfig>,
    pub border: Option<OneOrFour<bool>>,
    pub border_radius: Option<OneOrFour<Pt>>,
    #[serde(alias = "border_color")]
    pub border_colour: Option<ColourConfig>,
    pub border_width: Option<Pt>,
    pub padding: Option<OneOrFour<Pt>>,
    pub margin: Option<OneOrFour<Pt>>,
    pub fixed_leading: Option<Pt>,
    pub multiplied_leading: Option<f32>,
    #[serde(alias = "background_color")]
    pub background_colour: Option<ColourConfig>,
    /// ISO language code of the hyphenation dictionary
    pub hyphenation: Option<String>,
}

impl ParagraphConfig {
    /// The loose style described by this config. Values are checked once the style
    /// is applied to a paragraph.
    pub fn style(&self) -> ParagraphStyle {
        let mut style = ParagraphStyle::default();
        let config = self.clone();

        if let Some(respect) = config.respect_newlines_in_text {
            style.respect_newlines_in_text(respect);
        }
        if let Some(respect) = config.respect_spaces_in_text {
            style.respect_spaces_in_text(respect);
        }
        if let Some(font) = config.font {
            style.font(font);
        }
        if let Some(size) = config.font_size {
            style.font_size(size);
        }
        if let Some(alignment) = config.text_alignment {
            style.text_alignment(alignment);
        }
        if let Some(alignment) = config.alignment {
            style.alignment(alignment);
        }
        if let Some(colour) = config.font_colour {
            style.font_colour(colour);
        }
        if let Some(border) = config.border {
            style.border(border);
        }
        if let Some(radius) = config.border_radius {
            style.border_radius(radius);
        }
        if let Some(colour) = config.border_colour {
            style.border_colour(colour);
        }
        if let Some(width) = config.border_width {
            style.border_width(width);
        }
        if let Some(padding) = config.padding {
            style.padding(padding);
        }
        if let Some(margin) = config.margin {
            style.margin(margin);
        }
        if let Some(leading) = config.fixed_leading {
            style.fixed_leading(leading);
        }
        if let Some(factor) = config.multiplied_leading {
            style.multiplied_leading(factor);
        }
        if let Some(colour) = config.background_colour {
            style.background_colour(colour);
        }
        if let Some(code) = config.hyphenation {
            style.hyphenation(code);
        }

        style
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParagraphEntry {
    pub text: String,
    #[serde(flatten)]
    pub style: ParagraphConfig,
}

/// A page and the paragraphs of its single column layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// A page size name such as `"letter"` or `"A4 landscape"`; Letter when left out
    pub size: Option<String>,
    pub paragraphs: Vec<ParagraphEntry>,
}

impl PageConfig {
    pub fn build(&self) -> Result<Page, PDFError> {
        let mut page = match &self.size {
            Some(name) => Page::with_size_name(name)?,
            None => Page::default(),
        };
        for entry in &self.paragraphs {
            page.add(&entry.text, &entry.style.style())?;
        }
        log::debug!(
            "built page of {} paragraphs from config",
            self.paragraphs.len()
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Paragraph, Sides};
    use crate::Colour;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_config_matches_the_builder() {
        let config: ParagraphConfig = serde_json::from_str(
            r#"{
                "font": "Courier",
                "font_size": 14,
                "text_alignment": "right",
                "alignment": "bottom",
                "font_color": "red",
                "border": [true, false, true, false],
                "border_radius": 5,
                "border_width": 10,
                "padding": [1, 2, 3, 4],
                "background_colour": [0, 0, 255],
                "hyphenation": "en-us"
            }"#,
        )
        .unwrap();

        let mut style = ParagraphStyle::new();
        style
            .font("Courier")
            .font_size(14)
            .text_alignment("right")
            .alignment("bottom")
            .font_colour("red")
            .border((true, false, true, false))
            .border_radius(5)
            .border_width(10)
            .padding((1, 2, 3, 4))
            .background_colour(vec![0, 0, 255])
            .hyphenation("en-us");

        assert_eq!(
            Paragraph::styled("text", &config.style()).unwrap(),
            Paragraph::styled("text", &style).unwrap()
        );
    }

    #[test]
    fn empty_config_is_the_default_style() {
        let config: ParagraphConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.style(), ParagraphStyle::default());
    }

    #[test]
    fn invalid_values_fail_when_applied() {
        let config: ParagraphConfig =
            serde_json::from_str(r#"{ "font_colour": [1, 2, 3, 4] }"#).unwrap();
        assert!(matches!(
            Paragraph::styled("text", &config.style()),
            Err(PDFError::InvalidArgument(_))
        ));
    }

    #[test]
    fn pages_from_config() {
        let config: PageConfig = serde_json::from_str(
            r#"{
                "size": "a5 landscape",
                "paragraphs": [
                    { "text": "first", "margin": 0 },
                    { "text": "second", "border": true, "border_colour": "blue" }
                ]
            }"#,
        )
        .unwrap();

        let mut page = config.build().unwrap();
        assert!(page.width() > page.height());

        let paragraphs = page.layout().paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].margin, Sides::all(Some(Pt(0.0))));
        assert_eq!(paragraphs[1].border, Sides::all(true));
        assert_eq!(paragraphs[1].border_colour, Colour::new_rgb_bytes(0, 0, 255));
    }

    #[test]
    fn unknown_page_sizes_are_rejected() {
        let config: PageConfig = serde_json::from_str(r#"{ "size": "napkin" }"#).unwrap();
        assert!(config.build().is_err());
    }
}
