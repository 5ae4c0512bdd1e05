use crate::layout::{Corners, Sides};
use crate::units::{In, Mm};
use crate::{PDFError, Pt};

/// One value for all four sides (or corners) of a box, or four separate values.
/// Sides are listed clockwise from the top: (top, right, bottom, left); corners
/// clockwise from the top left: (top left, top right, bottom right, bottom left).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Broadcast<T> {
    One(T),
    Four(T, T, T, T),
}

impl<T: Clone> Broadcast<T> {
    /// Build from a list of one or four values
    pub fn from_slice(values: &[T]) -> Result<Broadcast<T>, PDFError> {
        match values {
            [value] => Ok(Broadcast::One(value.clone())),
            [a, b, c, d] => Ok(Broadcast::Four(a.clone(), b.clone(), c.clone(), d.clone())),
            _ => Err(PDFError::InvalidArgument(format!(
                "expected either 1 or 4 values, got {}",
                values.len()
            ))),
        }
    }

    pub fn sides(&self) -> Sides<T> {
        match self {
            Broadcast::One(value) => Sides::all(value.clone()),
            Broadcast::Four(top, right, bottom, left) => {
                Sides::trbl(top.clone(), right.clone(), bottom.clone(), left.clone())
            }
        }
    }

    pub fn corners(&self) -> Corners<T> {
        match self {
            Broadcast::One(value) => Corners::all(value.clone()),
            Broadcast::Four(top_left, top_right, bottom_right, bottom_left) => Corners::new(
                top_left.clone(),
                top_right.clone(),
                bottom_right.clone(),
                bottom_left.clone(),
            ),
        }
    }
}

impl<T> Broadcast<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Broadcast<U> {
        match self {
            Broadcast::One(value) => Broadcast::One(f(value)),
            Broadcast::Four(a, b, c, d) => Broadcast::Four(f(a), f(b), f(c), f(d)),
        }
    }
}

impl<T> From<T> for Broadcast<T> {
    fn from(value: T) -> Self {
        Broadcast::One(value)
    }
}

impl<T> From<(T, T, T, T)> for Broadcast<T> {
    fn from((a, b, c, d): (T, T, T, T)) -> Self {
        Broadcast::Four(a, b, c, d)
    }
}

impl<T> From<[T; 4]> for Broadcast<T> {
    fn from([a, b, c, d]: [T; 4]) -> Self {
        Broadcast::Four(a, b, c, d)
    }
}

/// Loose numbers broadcast into lengths
macro_rules! broadcast_lengths {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Broadcast<Pt> {
                fn from(value: $number) -> Self {
                    Broadcast::One(value.into())
                }
            }

            impl From<($number, $number, $number, $number)> for Broadcast<Pt> {
                fn from((a, b, c, d): ($number, $number, $number, $number)) -> Self {
                    Broadcast::Four(a.into(), b.into(), c.into(), d.into())
                }
            }

            impl From<[$number; 4]> for Broadcast<Pt> {
                fn from([a, b, c, d]: [$number; 4]) -> Self {
                    Broadcast::Four(a.into(), b.into(), c.into(), d.into())
                }
            }
        )*
    };
}

broadcast_lengths!(i32, u32, i64, f32, f64, In, Mm);

/// Expand into (top, right, bottom, left)
pub fn normalize_sides<T: Clone, B: Into<Broadcast<T>>>(value: B) -> Sides<T> {
    value.into().sides()
}

/// Expand into (top left, top right, bottom right, bottom left)
pub fn normalize_corners<T: Clone, B: Into<Broadcast<T>>>(value: B) -> Corners<T> {
    value.into().corners()
}

/// Margins may be left out entirely, in which case every side is `None` and the
/// layout picks
pub fn normalize_margin(value: Option<Broadcast<Pt>>) -> Sides<Option<Pt>> {
    match value {
        Some(margin) => margin.map(Some).sides(),
        None => Sides::all(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars_broadcast() {
        assert_eq!(normalize_sides::<Pt, _>(5), Sides::all(Pt(5.0)));
        assert_eq!(normalize_sides(true), Sides::all(true));
        assert_eq!(normalize_corners::<Pt, _>(2.5), Corners::all(Pt(2.5)));
    }

    #[test]
    fn tuples_are_positional() {
        let sides: Sides<Pt> = normalize_sides((1, 2, 3, 4));
        assert_eq!(sides, Sides::trbl(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0)));

        let border: Sides<bool> = normalize_sides((true, false, true, false));
        assert!(border.top && !border.right && border.bottom && !border.left);

        let corners: Corners<Pt> = normalize_corners([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(corners.top_left, Pt(1.0));
        assert_eq!(corners.bottom_left, Pt(4.0));
    }

    #[test]
    fn slices_need_one_or_four_values() {
        assert_eq!(Broadcast::from_slice(&[Pt(1.0)]).unwrap(), Broadcast::One(Pt(1.0)));
        assert!(Broadcast::from_slice(&[1, 2, 3, 4]).is_ok());
        assert!(matches!(
            Broadcast::from_slice(&[1, 2, 3]),
            Err(PDFError::InvalidArgument(_))
        ));
        assert!(Broadcast::<i32>::from_slice(&[]).is_err());
    }

    #[test]
    fn margins_default_to_none() {
        assert_eq!(normalize_margin(None), Sides::all(None));
        assert_eq!(
            normalize_margin(Some(Broadcast::from(10))),
            Sides::all(Some(Pt(10.0)))
        );
    }
}
