//! Conversion of loosely typed arguments into the canonical types used by the
//! layout engine.
//!
//! Every loose argument type (`*Arg`, [Broadcast]) implements `From` for the
//! forms it accepts, so functions taking `impl Into<ColourArg>` accept `"red"`,
//! `"#ff0000"`, `(255, 0, 0)` and [`Colour`](crate::Colour) alike. The
//! `normalize_*` functions resolve them, returning
//! [`PDFError::InvalidArgument`](crate::PDFError::InvalidArgument) (or a more
//! specific error) when the input can't be resolved. Invalid input is never
//! replaced with a default.
//!
//! ```
//! use pdf_ergo::normalize::{normalize_alignment, normalize_colour, normalize_rectangle};
//! use pdf_ergo::layout::{HorizontalAlignment, VerticalAlignment};
//! use pdf_ergo::Rect;
//!
//! assert_eq!(
//!     normalize_alignment("bottom right").unwrap(),
//!     (VerticalAlignment::Bottom, HorizontalAlignment::Right)
//! );
//! assert_eq!(normalize_colour("RED").unwrap(), normalize_colour((255, 0, 0)).unwrap());
//! assert_eq!(normalize_rectangle((1, 2, 3, 4)).unwrap(), Rect::new(1, 2, 3, 4));
//! ```

mod alignment;
mod broadcast;
mod colour;
mod font;
mod hyphenation;
mod rect;

pub use self::alignment::*;
pub use self::broadcast::*;
pub use self::colour::*;
pub use self::font::*;
pub use self::hyphenation::*;
pub use self::rect::*;
