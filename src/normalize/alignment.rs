use crate::layout::{HorizontalAlignment, TextAlignment, VerticalAlignment};
use crate::PDFError;

const TEXT_ALIGNMENT_ERROR: &str = "text alignment must be 'left', 'center', 'right', or 'justified'";
const VERTICAL_ALIGNMENT_ERROR: &str = "vertical alignment must be 'top', 'middle', or 'bottom'";
const HORIZONTAL_ALIGNMENT_ERROR: &str =
    "horizontal alignment must be 'left', 'centered', or 'right'";
const BLOCK_ALIGNMENT_ERROR: &str =
    "alignment must include 'top', 'middle', 'bottom', 'left', 'center', or 'right'";

/// Every alignment keyword, whichever axis it belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Centered,
    Right,
    Justified,
    Top,
    Middle,
    Bottom,
}

/// An alignment given either as a keyword or as free text such as `"bottom right"`
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentArg {
    Alignment(Alignment),
    Text(String),
}

impl From<Alignment> for AlignmentArg {
    fn from(alignment: Alignment) -> Self {
        AlignmentArg::Alignment(alignment)
    }
}

impl From<&str> for AlignmentArg {
    fn from(text: &str) -> Self {
        AlignmentArg::Text(text.to_string())
    }
}

impl From<String> for AlignmentArg {
    fn from(text: String) -> Self {
        AlignmentArg::Text(text)
    }
}

impl From<TextAlignment> for AlignmentArg {
    fn from(alignment: TextAlignment) -> Self {
        AlignmentArg::Alignment(match alignment {
            TextAlignment::Left => Alignment::Left,
            TextAlignment::Centered => Alignment::Centered,
            TextAlignment::Right => Alignment::Right,
            TextAlignment::Justified => Alignment::Justified,
        })
    }
}

impl From<VerticalAlignment> for AlignmentArg {
    fn from(alignment: VerticalAlignment) -> Self {
        AlignmentArg::Alignment(match alignment {
            VerticalAlignment::Top => Alignment::Top,
            VerticalAlignment::Middle => Alignment::Middle,
            VerticalAlignment::Bottom => Alignment::Bottom,
        })
    }
}

impl From<HorizontalAlignment> for AlignmentArg {
    fn from(alignment: HorizontalAlignment) -> Self {
        AlignmentArg::Alignment(match alignment {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Centered => Alignment::Centered,
            HorizontalAlignment::Right => Alignment::Right,
        })
    }
}

fn invalid(message: &str) -> PDFError {
    PDFError::InvalidArgument(message.to_string())
}

/// Resolve an alignment for the lines of a paragraph. Strings are matched
/// exactly, ignoring case and surrounding whitespace.
pub fn normalize_text_alignment<A: Into<AlignmentArg>>(value: A) -> Result<TextAlignment, PDFError> {
    match value.into() {
        AlignmentArg::Alignment(Alignment::Left) => Ok(TextAlignment::Left),
        AlignmentArg::Alignment(Alignment::Centered) => Ok(TextAlignment::Centered),
        AlignmentArg::Alignment(Alignment::Right) => Ok(TextAlignment::Right),
        AlignmentArg::Alignment(Alignment::Justified) => Ok(TextAlignment::Justified),
        AlignmentArg::Alignment(_) => Err(invalid(TEXT_ALIGNMENT_ERROR)),
        AlignmentArg::Text(text) => match text.trim().to_lowercase().as_str() {
            "left" => Ok(TextAlignment::Left),
            "center" | "centered" => Ok(TextAlignment::Centered),
            "right" => Ok(TextAlignment::Right),
            "justified" => Ok(TextAlignment::Justified),
            _ => Err(invalid(TEXT_ALIGNMENT_ERROR)),
        },
    }
}

pub fn normalize_vertical_alignment<A: Into<AlignmentArg>>(
    value: A,
) -> Result<VerticalAlignment, PDFError> {
    match value.into() {
        AlignmentArg::Alignment(Alignment::Top) => Ok(VerticalAlignment::Top),
        AlignmentArg::Alignment(Alignment::Middle) => Ok(VerticalAlignment::Middle),
        AlignmentArg::Alignment(Alignment::Bottom) => Ok(VerticalAlignment::Bottom),
        AlignmentArg::Alignment(_) => Err(invalid(VERTICAL_ALIGNMENT_ERROR)),
        AlignmentArg::Text(text) => match text.trim().to_lowercase().as_str() {
            "top" => Ok(VerticalAlignment::Top),
            "middle" => Ok(VerticalAlignment::Middle),
            "bottom" => Ok(VerticalAlignment::Bottom),
            _ => Err(invalid(VERTICAL_ALIGNMENT_ERROR)),
        },
    }
}

pub fn normalize_horizontal_alignment<A: Into<AlignmentArg>>(
    value: A,
) -> Result<HorizontalAlignment, PDFError> {
    match value.into() {
        AlignmentArg::Alignment(Alignment::Left) => Ok(HorizontalAlignment::Left),
        AlignmentArg::Alignment(Alignment::Centered) => Ok(HorizontalAlignment::Centered),
        AlignmentArg::Alignment(Alignment::Right) => Ok(HorizontalAlignment::Right),
        AlignmentArg::Alignment(_) => Err(invalid(HORIZONTAL_ALIGNMENT_ERROR)),
        AlignmentArg::Text(text) => match text.trim().to_lowercase().as_str() {
            "left" => Ok(HorizontalAlignment::Left),
            "center" | "centered" => Ok(HorizontalAlignment::Centered),
            "right" => Ok(HorizontalAlignment::Right),
            _ => Err(invalid(HORIZONTAL_ALIGNMENT_ERROR)),
        },
    }
}

/// Resolve where a box sits within the space it is given. A single keyword fills
/// in the default for the other axis (top, left). Free text is searched for one
/// keyword per axis anywhere in the string, so `"Bottom right corner"` works;
/// axes without a keyword keep their default.
pub fn normalize_alignment<A: Into<AlignmentArg>>(
    value: A,
) -> Result<(VerticalAlignment, HorizontalAlignment), PDFError> {
    let text = match value.into() {
        AlignmentArg::Alignment(Alignment::Justified) => return Err(invalid(BLOCK_ALIGNMENT_ERROR)),
        AlignmentArg::Alignment(alignment @ (Alignment::Top | Alignment::Middle | Alignment::Bottom)) => {
            return Ok((normalize_vertical_alignment(alignment)?, HorizontalAlignment::Left))
        }
        AlignmentArg::Alignment(alignment) => {
            return Ok((VerticalAlignment::Top, normalize_horizontal_alignment(alignment)?))
        }
        AlignmentArg::Text(text) => text.to_lowercase(),
    };

    let vertical = if text.contains("top") {
        VerticalAlignment::Top
    } else if text.contains("middle") {
        VerticalAlignment::Middle
    } else if text.contains("bottom") {
        VerticalAlignment::Bottom
    } else {
        VerticalAlignment::Top
    };

    let horizontal = if text.contains("left") {
        HorizontalAlignment::Left
    } else if text.contains("center") {
        HorizontalAlignment::Centered
    } else if text.contains("right") {
        HorizontalAlignment::Right
    } else {
        HorizontalAlignment::Left
    };

    Ok((vertical, horizontal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_alignment_ignores_case_and_edges() {
        assert_eq!(normalize_text_alignment("JustIFied").unwrap(), TextAlignment::Justified);
        assert_eq!(normalize_text_alignment("  center ").unwrap(), TextAlignment::Centered);
        assert_eq!(normalize_text_alignment("Centered").unwrap(), TextAlignment::Centered);
        assert_eq!(normalize_text_alignment(Alignment::Right).unwrap(), TextAlignment::Right);
        assert_eq!(normalize_text_alignment(TextAlignment::Left).unwrap(), TextAlignment::Left);
    }

    #[test]
    fn text_alignment_rejects_other_axes() {
        let err = normalize_text_alignment(Alignment::Top).unwrap_err();
        assert_eq!(
            err.to_string(),
            "text alignment must be 'left', 'center', 'right', or 'justified'"
        );
        assert!(normalize_text_alignment("top").is_err());
        assert!(normalize_text_alignment("left-ish").is_err());
    }

    #[test]
    fn single_axis_alignments() {
        assert_eq!(normalize_vertical_alignment(" MIDDLE").unwrap(), VerticalAlignment::Middle);
        assert_eq!(normalize_vertical_alignment(Alignment::Bottom).unwrap(), VerticalAlignment::Bottom);
        assert_eq!(
            normalize_vertical_alignment(Alignment::Left).unwrap_err().to_string(),
            "vertical alignment must be 'top', 'middle', or 'bottom'"
        );
        assert_eq!(normalize_horizontal_alignment("center").unwrap(), HorizontalAlignment::Centered);
        assert_eq!(normalize_horizontal_alignment(Alignment::Right).unwrap(), HorizontalAlignment::Right);
        assert_eq!(
            normalize_horizontal_alignment(Alignment::Justified).unwrap_err().to_string(),
            "horizontal alignment must be 'left', 'centered', or 'right'"
        );
        assert!(normalize_horizontal_alignment("justified").is_err());
    }

    #[test]
    fn combined_alignment_defaults() {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;

        assert_eq!(normalize_alignment("top").unwrap(), (V::Top, H::Left));
        assert_eq!(normalize_alignment("right").unwrap(), (V::Top, H::Right));
        assert_eq!(normalize_alignment("").unwrap(), (V::Top, H::Left));
        assert_eq!(normalize_alignment(Alignment::Middle).unwrap(), (V::Middle, H::Left));
        assert_eq!(normalize_alignment(Alignment::Centered).unwrap(), (V::Top, H::Centered));
        assert_eq!(normalize_alignment(VerticalAlignment::Bottom).unwrap(), (V::Bottom, H::Left));
    }

    #[test]
    fn combined_alignment_searches_substrings() {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;

        assert_eq!(normalize_alignment(" boTTom xxx ").unwrap(), (V::Bottom, H::Left));
        assert_eq!(normalize_alignment("bottom right").unwrap(), (V::Bottom, H::Right));
        assert_eq!(normalize_alignment("Centered, in the middle").unwrap(), (V::Middle, H::Centered));
    }

    #[test]
    fn justified_is_not_a_block_alignment() {
        assert!(matches!(
            normalize_alignment(Alignment::Justified),
            Err(PDFError::InvalidArgument(_))
        ));
        assert!(normalize_alignment(TextAlignment::Justified).is_err());
    }
}
