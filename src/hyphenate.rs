use crate::PDFError;
use ::hyphenation::{Hyphenator, Language, Load, Standard};
use std::fmt;
use std::sync::Arc;

/// ISO codes understood by [Hyphenation::new], lower-cased
const LANGUAGES: &[(&str, Language)] = &[
    ("en", Language::EnglishUS),
    ("en-us", Language::EnglishUS),
    ("en-gb", Language::EnglishGB),
    ("de", Language::German1996),
    ("de-1996", Language::German1996),
    ("fr", Language::French),
    ("es", Language::Spanish),
    ("it", Language::Italian),
    ("nl", Language::Dutch),
];

/// A hyphenation dictionary for one language, used to break long words across
/// lines. Dictionaries are shared, so cloning is cheap.
#[derive(Clone)]
pub struct Hyphenation {
    language_code: String,
    dictionary: Arc<Standard>,
}

impl Hyphenation {
    /// Load the dictionary for an ISO language code such as `"en-us"`. Only
    /// dictionaries embedded at build time are available; `en-us` always is.
    pub fn new(language_code: &str) -> Result<Hyphenation, PDFError> {
        let code = language_code.trim().to_lowercase().replace('_', "-");
        let language = LANGUAGES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|&(_, language)| language)
            .ok_or_else(|| PDFError::UnsupportedLanguage(language_code.to_string()))?;

        let dictionary =
            Standard::from_embedded(language).map_err(|e| PDFError::Hyphenation {
                language: code.clone(),
                reason: e.to_string(),
            })?;
        log::debug!("loaded hyphenation dictionary for {code}");

        Ok(Hyphenation {
            language_code: code,
            dictionary: Arc::new(dictionary),
        })
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Byte offsets within `word` where a hyphen may be inserted
    pub fn break_points(&self, word: &str) -> Vec<usize> {
        self.dictionary
            .hyphenate(word)
            .breaks
            .into_iter()
            .filter(|&at| at > 0 && at < word.len() && word.is_char_boundary(at))
            .collect()
    }
}

impl fmt::Debug for Hyphenation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hyphenation")
            .field("language_code", &self.language_code)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Hyphenation {
    fn eq(&self, other: &Self) -> bool {
        self.language_code == other.language_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_embedded() {
        let hyphenation = Hyphenation::new("EN-US").expect("en-us is embedded");
        assert_eq!(hyphenation.language_code(), "en-us");
        assert!(!hyphenation.break_points("hyphenation").is_empty());
        assert!(hyphenation.break_points("a").is_empty());
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(matches!(
            Hyphenation::new("tlh"),
            Err(PDFError::UnsupportedLanguage(code)) if code == "tlh"
        ));
    }
}
