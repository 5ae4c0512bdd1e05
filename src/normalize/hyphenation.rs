use crate::hyphenate::Hyphenation;
use crate::PDFError;

/// A hyphenation dictionary, or the ISO language code to load one for
#[derive(Debug, Clone, PartialEq)]
pub enum HyphenationArg {
    Hyphenation(Hyphenation),
    Code(String),
}

impl From<Hyphenation> for HyphenationArg {
    fn from(hyphenation: Hyphenation) -> Self {
        HyphenationArg::Hyphenation(hyphenation)
    }
}

impl From<&str> for HyphenationArg {
    fn from(code: &str) -> Self {
        HyphenationArg::Code(code.to_string())
    }
}

impl From<String> for HyphenationArg {
    fn from(code: String) -> Self {
        HyphenationArg::Code(code)
    }
}

pub fn normalize_hyphenation<H: Into<HyphenationArg>>(value: H) -> Result<Hyphenation, PDFError> {
    match value.into() {
        HyphenationArg::Hyphenation(hyphenation) => Ok(hyphenation),
        HyphenationArg::Code(code) => Hyphenation::new(&code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_load_dictionaries() {
        let hyphenation = normalize_hyphenation("en-us").unwrap();
        assert_eq!(hyphenation.language_code(), "en-us");
        assert_eq!(normalize_hyphenation(hyphenation.clone()).unwrap(), hyphenation);
    }

    #[test]
    fn failures_are_surfaced() {
        assert!(matches!(
            normalize_hyphenation("xx"),
            Err(PDFError::UnsupportedLanguage(_))
        ));
    }
}
