//! Text layout: paragraphs and the column they are stacked in.
//!
//! A [Paragraph] knows how to break its text into lines for a given width and how
//! to draw itself (text, padding, background and borders) inside a rectangle. A
//! [SingleColumnLayout] stacks paragraphs down a page.
//!
//! # Example
//!
//! ```
//! use pdf_ergo::{Document, Page, Pt, Rect};
//! use pdf_ergo::layout::{Paragraph, TextAlignment};
//!
//! let mut doc = Document::default();
//! let page = doc.add_page();
//!
//! let mut heading = Paragraph::new("Hello, world!");
//! heading.font_size = Pt(24.0);
//! heading.text_alignment = TextAlignment::Centered;
//! page.layout().add(heading).add(Paragraph::new("Lorem ipsum dolor sit amet."));
//!
//! page.paint(&Paragraph::new("Footer"), Rect::new(72, 36, 468, 24))
//!     .expect("a rect is a valid rectangle");
//!
//! let bytes = doc.to_bytes().expect("can render the document");
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod alignment;
mod margins;
mod paragraph;
mod single_column;

pub use alignment::*;
pub use margins::*;
pub use paragraph::Paragraph;
pub use single_column::*;
