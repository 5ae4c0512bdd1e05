//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape,
//! or [`from_name`](crate::pagesize::from_name) to look a size up by a human-readable name.
//!
//! # Available Sizes
//!
//! ## North American
//! `LETTER`, `LEGAL`, `TABLOID`, `LEDGER`, `EXECUTIVE`
//!
//! ## ISO A-Series
//! `A0` through `A10`
//!
//! ## ISO B-Series
//! `B0` through `B10`
//!
//! # Example
//!
//! ```
//! use pdf_ergo::pagesize::{self, LETTER, A4, PageOrientation};
//!
//! // use a standard size
//! let page_size = LETTER;
//!
//! // convert to landscape
//! let landscape = A4.landscape();
//! assert_eq!(pagesize::from_name("a4 landscape").unwrap(), landscape);
//! ```

use crate::units::*;
use crate::PDFError;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const LEDGER: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const EXECUTIVE: PageSize = (Pt(7.25 * 72.0), Pt(10.5 * 72.0));

// iso a-series (converted from mm to points)
pub const A0: PageSize = (Pt(841.0 * 72.0 / 25.4), Pt(1189.0 * 72.0 / 25.4));
pub const A1: PageSize = (Pt(594.0 * 72.0 / 25.4), Pt(841.0 * 72.0 / 25.4));
pub const A2: PageSize = (Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));
pub const A7: PageSize = (Pt(74.0 * 72.0 / 25.4), Pt(105.0 * 72.0 / 25.4));
pub const A8: PageSize = (Pt(52.0 * 72.0 / 25.4), Pt(74.0 * 72.0 / 25.4));
pub const A9: PageSize = (Pt(37.0 * 72.0 / 25.4), Pt(52.0 * 72.0 / 25.4));
pub const A10: PageSize = (Pt(26.0 * 72.0 / 25.4), Pt(37.0 * 72.0 / 25.4));

// iso b-series (converted from mm to points)
pub const B0: PageSize = (Pt(1000.0 * 72.0 / 25.4), Pt(1414.0 * 72.0 / 25.4));
pub const B1: PageSize = (Pt(707.0 * 72.0 / 25.4), Pt(1000.0 * 72.0 / 25.4));
pub const B2: PageSize = (Pt(500.0 * 72.0 / 25.4), Pt(707.0 * 72.0 / 25.4));
pub const B3: PageSize = (Pt(353.0 * 72.0 / 25.4), Pt(500.0 * 72.0 / 25.4));
pub const B4: PageSize = (Pt(250.0 * 72.0 / 25.4), Pt(353.0 * 72.0 / 25.4));
pub const B5: PageSize = (Pt(176.0 * 72.0 / 25.4), Pt(250.0 * 72.0 / 25.4));
pub const B6: PageSize = (Pt(125.0 * 72.0 / 25.4), Pt(176.0 * 72.0 / 25.4));
pub const B7: PageSize = (Pt(88.0 * 72.0 / 25.4), Pt(125.0 * 72.0 / 25.4));
pub const B8: PageSize = (Pt(62.0 * 72.0 / 25.4), Pt(88.0 * 72.0 / 25.4));
pub const B9: PageSize = (Pt(44.0 * 72.0 / 25.4), Pt(62.0 * 72.0 / 25.4));
pub const B10: PageSize = (Pt(31.0 * 72.0 / 25.4), Pt(44.0 * 72.0 / 25.4));

/// Named sizes, longest names first so that e.g. `A10` is tested before `A1`
const NAMED_SIZES: &[(&str, PageSize)] = &[
    ("EXECUTIVE", EXECUTIVE),
    ("TABLOID", TABLOID),
    ("LETTER", LETTER),
    ("LEDGER", LEDGER),
    ("LEGAL", LEGAL),
    ("A10", A10),
    ("B10", B10),
    ("A0", A0),
    ("A1", A1),
    ("A2", A2),
    ("A3", A3),
    ("A4", A4),
    ("A5", A5),
    ("A6", A6),
    ("A7", A7),
    ("A8", A8),
    ("A9", A9),
    ("B0", B0),
    ("B1", B1),
    ("B2", B2),
    ("B3", B3),
    ("B4", B4),
    ("B5", B5),
    ("B6", B6),
    ("B7", B7),
    ("B8", B8),
    ("B9", B9),
];

/// Look up a page size by name, ignoring case. The name may be combined with
/// `portrait` or `landscape` (i.e. `"a4 landscape"`, `"Letter-Portrait"`); without
/// either, the portrait orientation is returned.
///
/// Matching is done by searching for each size name inside the given text.
pub fn from_name(name: &str) -> Result<PageSize, PDFError> {
    let upper = name.to_uppercase();
    let size = NAMED_SIZES
        .iter()
        .find(|(size_name, _)| upper.contains(size_name))
        .map(|&(_, size)| size)
        .ok_or_else(|| {
            PDFError::InvalidArgument(format!(
                "page size must be a valid page size name, got {name:?}"
            ))
        })?;

    let size = if upper.contains("LANDSCAPE") {
        size.landscape()
    } else {
        size.portrait()
    };
    log::debug!("resolved page size {name:?} to {} x {}", size.0, size.1);
    Ok(size)
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_defaults_to_portrait() {
        assert_eq!(from_name("letter").unwrap(), (Pt(612.0), Pt(792.0)));
        assert_eq!(from_name("LETTER PORTRAIT").unwrap(), (Pt(612.0), Pt(792.0)));
        assert_eq!(from_name("Letter-Landscape").unwrap(), (Pt(792.0), Pt(612.0)));
    }

    #[test]
    fn longer_names_win() {
        assert_eq!(from_name("a10").unwrap(), A10);
        assert_eq!(from_name("a10 landscape").unwrap(), A10.landscape());
        assert_eq!(from_name("B10").unwrap(), B10);
        assert_eq!(from_name("a1").unwrap(), A1);
    }

    #[test]
    fn ledger_is_tabloid_rotated() {
        assert_eq!(from_name("ledger landscape").unwrap(), (Pt(1224.0), Pt(792.0)));
        assert_eq!(from_name("tabloid").unwrap(), (Pt(792.0), Pt(1224.0)));
    }

    #[test]
    fn unknown_names_fail() {
        for bad in ["", "landscape", "quarto", "C4"] {
            assert!(
                matches!(from_name(bad), Err(PDFError::InvalidArgument(_))),
                "{bad:?} should not resolve"
            );
        }
    }
}
