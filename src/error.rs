use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("{0}")]
    /// A loose argument could not be normalized; the message names the accepted values
    InvalidArgument(String),

    #[error("invalid colour {0:?}: expected a colour name or a 6-digit RGB hex string")]
    /// A string was neither a known colour name nor a valid hex colour
    InvalidColour(String),

    #[error("unsupported hyphenation language code {0:?}")]
    /// The ISO language code doesn't name a known hyphenation language
    UnsupportedLanguage(String),

    #[error("can't load hyphenation dictionary for {language:?}: {reason}")]
    /// The hyphenation dictionary for a known language isn't available
    Hyphenation { language: String, reason: String },

    #[error("a page listed in the page order is missing from the document")]
    /// The document's page order refers to a page that no longer exists
    PageMissing,
}
