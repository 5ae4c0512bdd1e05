//! Units of measurement used throughout the crate.
//!
//! Every length in a PDF is ultimately expressed in [Pt]. The other units exist
//! to make constructing lengths more natural and convert into [Pt] losslessly
//! (within `f32` precision).

use derive_more::{
    Add, AddAssign, Deref, DerefMut, Display, Div, DivAssign, From, Into, Mul, MulAssign, Sub,
    SubAssign, Sum,
};
use serde::Deserialize;

/// Points, 1/72 of an inch. This is the canonical numeric type of the crate:
/// loose numbers (integers, floats, inches, millimetres) are all normalized to
/// it before reaching the layout engine.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    DivAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, Deserialize)]
#[serde(transparent)]
pub struct In(pub f32);

/// Millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / 72.0)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Self {
        Mm(value.0 * 25.4 / 72.0)
    }
}

impl From<i32> for Pt {
    fn from(value: i32) -> Self {
        Pt(value as f32)
    }
}

impl From<u32> for Pt {
    fn from(value: u32) -> Self {
        Pt(value as f32)
    }
}

impl From<i64> for Pt {
    fn from(value: i64) -> Self {
        Pt(value as f32)
    }
}

impl From<f64> for Pt {
    fn from(value: f64) -> Self {
        Pt(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_numbers_become_points() {
        assert_eq!(Pt::from(12), Pt(12.0));
        assert_eq!(Pt::from(12u32), Pt(12.0));
        assert_eq!(Pt::from(12.5f64), Pt(12.5));
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn arithmetic() {
        let mut a = Pt(10.0) + Pt(5.0) - Pt(3.0);
        a += Pt(1.0);
        assert_eq!(a, Pt(13.0));
        assert_eq!(a * 2.0, Pt(26.0));
        assert_eq!(a / 2.0, Pt(6.5));
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
        assert_eq!(format!("{}", Pt(612.0)), "612");
    }
}
