use crate::{PDFError, Pt, Rect};

/// A rectangle given as a [Rect], an `(x, y, width, height)` tuple or array, or a
/// list of numbers that has to turn out to be four long
#[derive(Debug, Clone, PartialEq)]
pub enum RectArg {
    Rect(Rect),
    Xywh(Pt, Pt, Pt, Pt),
    List(Vec<Pt>),
}

impl From<Rect> for RectArg {
    fn from(rect: Rect) -> Self {
        RectArg::Rect(rect)
    }
}

impl<X, Y, W, H> From<(X, Y, W, H)> for RectArg
where
    X: Into<Pt>,
    Y: Into<Pt>,
    W: Into<Pt>,
    H: Into<Pt>,
{
    fn from((x, y, width, height): (X, Y, W, H)) -> Self {
        RectArg::Xywh(x.into(), y.into(), width.into(), height.into())
    }
}

impl<T: Into<Pt>> From<[T; 4]> for RectArg {
    fn from([x, y, width, height]: [T; 4]) -> Self {
        RectArg::Xywh(x.into(), y.into(), width.into(), height.into())
    }
}

impl<T: Into<Pt>> From<Vec<T>> for RectArg {
    fn from(values: Vec<T>) -> Self {
        RectArg::List(values.into_iter().map(Into::into).collect())
    }
}

/// Resolve a rectangle; `(x, y, width, height)` is measured from the lower left
/// corner, as with [Rect::new]
pub fn normalize_rectangle<R: Into<RectArg>>(value: R) -> Result<Rect, PDFError> {
    match value.into() {
        RectArg::Rect(rect) => Ok(rect),
        RectArg::Xywh(x, y, width, height) => Ok(Rect::new(x, y, width, height)),
        RectArg::List(values) => match values.as_slice() {
            &[x, y, width, height] => Ok(Rect::new(x, y, width, height)),
            _ => Err(PDFError::InvalidArgument(format!(
                "a rectangle needs exactly 4 numbers (x, y, width, height), got {}",
                values.len()
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn tuples_become_rects() {
        let rect = normalize_rectangle((1, 2, 3, 4)).unwrap();
        assert_eq!(rect.x(), Pt(1.0));
        assert_eq!(rect.y(), Pt(2.0));
        assert_eq!(rect.width(), Pt(3.0));
        assert_eq!(rect.height(), Pt(4.0));
    }

    #[test]
    fn mixed_number_types() {
        let rect = normalize_rectangle((0, 0.5, Pt(10.0), In(1.0))).unwrap();
        assert_eq!(rect, Rect::new(0, 0.5, 10, 72));
        assert_eq!(normalize_rectangle([1.0f32, 2.0, 3.0, 4.0]).unwrap(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn rects_pass_through() {
        let rect = Rect::new(5, 6, 7, 8);
        assert_eq!(normalize_rectangle(rect).unwrap(), rect);
    }

    #[test]
    fn lists_must_have_four_numbers() {
        assert_eq!(normalize_rectangle(vec![1, 2, 3, 4]).unwrap(), Rect::new(1, 2, 3, 4));
        assert!(matches!(
            normalize_rectangle(vec![1, 2, 3]),
            Err(PDFError::InvalidArgument(_))
        ));
    }
}
