use crate::colour::Colour;
use crate::PDFError;

/// A colour given as a [Colour], a name (`"cornflowerblue"`), a hex string
/// (`"#6495ed"` or `"6495ed"`), an `(r, g, b)` triple of bytes, or a list of
/// integer components as read from configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ColourArg {
    Colour(Colour),
    Text(String),
    Rgb(u8, u8, u8),
    Components(Vec<i64>),
}

impl From<Colour> for ColourArg {
    fn from(colour: Colour) -> Self {
        ColourArg::Colour(colour)
    }
}

impl From<&str> for ColourArg {
    fn from(text: &str) -> Self {
        ColourArg::Text(text.to_string())
    }
}

impl From<String> for ColourArg {
    fn from(text: String) -> Self {
        ColourArg::Text(text)
    }
}

impl From<(u8, u8, u8)> for ColourArg {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColourArg::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for ColourArg {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColourArg::Rgb(r, g, b)
    }
}

impl From<Vec<i64>> for ColourArg {
    fn from(components: Vec<i64>) -> Self {
        ColourArg::Components(components)
    }
}

impl From<&[i64]> for ColourArg {
    fn from(components: &[i64]) -> Self {
        ColourArg::Components(components.to_vec())
    }
}

/// Resolve a colour. Names are looked up case-insensitively in the X11 / CSS
/// palette; anything else must be six hex digits. Triples take the same route as
/// hex strings, so `(255, 0, 0)`, `"#ff0000"` and `"red"` are all the same colour.
pub fn normalize_colour<C: Into<ColourArg>>(value: C) -> Result<Colour, PDFError> {
    match value.into() {
        ColourArg::Colour(colour) => Ok(colour),
        // both lookups trim and ignore case; errors report the text as given
        ColourArg::Text(text) => match Colour::named(&text) {
            Some(colour) => Ok(colour),
            None => Colour::from_hex(&text),
        },
        ColourArg::Rgb(r, g, b) => Colour::from_hex(&format!("{r:02x}{g:02x}{b:02x}")),
        ColourArg::Components(components) => {
            let bytes: Vec<u8> = components
                .iter()
                .map(|&c| u8::try_from(c).ok())
                .collect::<Option<Vec<u8>>>()
                .filter(|bytes| bytes.len() == 3)
                .ok_or_else(|| {
                    PDFError::InvalidArgument(format!(
                        "a colour needs exactly 3 components between 0 and 255, got {components:?}"
                    ))
                })?;
            normalize_colour((bytes[0], bytes[1], bytes[2]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_colours_pass_through() {
        for colour in [colours::BLACK, colours::RED, colours::CYAN, Colour::new_rgb(0.1, 0.2, 0.3)] {
            assert_eq!(normalize_colour(colour).unwrap(), colour);
            let twice = normalize_colour(normalize_colour(colour).unwrap()).unwrap();
            assert_eq!(twice, colour);
        }
    }

    #[test]
    fn names_ignore_case() {
        let expected = Colour::new_rgb_bytes(0x64, 0x95, 0xed);
        assert_eq!(normalize_colour("CornflowerBlue").unwrap(), expected);
        assert_eq!(normalize_colour("cornflowerblue").unwrap(), expected);
        assert_eq!(normalize_colour(" CORNFLOWERBLUE ").unwrap(), expected);
    }

    #[test]
    fn triples_and_hex_agree() {
        for r in (0..=240u8).step_by(16) {
            for g in (0..=240u8).step_by(16) {
                for b in (0..=240u8).step_by(16) {
                    let from_tuple = normalize_colour((r, g, b)).unwrap();
                    let hex = format!("{r:02x}{g:02x}{b:02x}");
                    assert_eq!(from_tuple, normalize_colour(format!("#{hex}")).unwrap());
                    assert_eq!(from_tuple, normalize_colour(hex).unwrap());
                }
            }
        }
    }

    #[test]
    fn component_lists_need_three_bytes() {
        assert_eq!(
            normalize_colour(vec![255i64, 0, 0]).unwrap(),
            normalize_colour("red").unwrap()
        );
        for bad in [vec![1i64, 2], vec![1, 2, 3, 4], vec![0, 0, 256], vec![-1, 0, 0]] {
            assert!(
                matches!(normalize_colour(bad.clone()), Err(PDFError::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_names_are_parsed_as_hex() {
        assert!(matches!(
            normalize_colour("blurple"),
            Err(PDFError::InvalidColour(_))
        ));
        assert!(matches!(
            normalize_colour("#12345"),
            Err(PDFError::InvalidColour(_))
        ));
    }

    #[test]
    fn errors_report_the_text_as_given() {
        assert!(matches!(
            normalize_colour("  #FFF "),
            Err(PDFError::InvalidColour(text)) if text == "  #FFF "
        ));
        assert_eq!(
            normalize_colour(" #FFFFFF ").unwrap(),
            Colour::new_rgb_bytes(255, 255, 255)
        );
    }
}
