//! Build PDF documents from forgiving arguments.
//!
//! Colours can be names, hex strings or byte triples; rectangles can be tuples of
//! any number type; fonts can be standard font names or font file paths; borders,
//! padding and margins can be one value or one per side. The [normalize] module
//! turns all of these into the strict types the layout engine works with, and
//! reports anything it can't make sense of as a [PDFError].
//!
//! ```
//! use pdf_ergo::{Document, ParagraphStyle};
//!
//! let mut style = ParagraphStyle::default();
//! style.font("Times-Roman").font_size(14).text_alignment("justified");
//!
//! let mut doc = Document::new();
//! doc.add_page()
//!     .add("Hello, world!", &style)
//!     .unwrap();
//! let bytes = doc.to_bytes().unwrap();
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod annotation;
pub use annotation::*;

mod colour;
pub use colour::*;

pub mod config;

pub(crate) mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod hyphenate;
pub use hyphenate::Hyphenation;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;
pub use layout::{Paragraph, SingleColumnLayout};

pub mod normalize;
pub use normalize::{
    Alignment, AlignmentArg, Broadcast, ColourArg, FontArg, HyphenationArg, RectArg,
};

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
