use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its lower-left corner and its size. Any number type
    /// that converts into [Pt] is accepted, so `Rect::new(50, 50, 100.0, In(1.0))`
    /// works as expected.
    pub fn new<X, Y, W, H>(lower_left_x: X, lower_left_y: Y, width: W, height: H) -> Rect
    where
        X: Into<Pt>,
        Y: Into<Pt>,
        W: Into<Pt>,
        H: Into<Pt>,
    {
        let x: Pt = lower_left_x.into();
        let y: Pt = lower_left_y.into();
        Rect {
            x1: x,
            y1: y,
            x2: x + width.into(),
            y2: y + height.into(),
        }
    }

    /// The x-coordinate of the lower-left corner
    pub fn x(&self) -> Pt {
        self.x1
    }

    /// The y-coordinate of the lower-left corner
    pub fn y(&self) -> Pt {
        self.y1
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Shrink the rectangle by the given amount on each side
    pub(crate) fn inset(&self, top: Pt, right: Pt, bottom: Pt, left: Pt) -> Rect {
        Rect {
            x1: self.x1 + left,
            y1: self.y1 + bottom,
            x2: self.x2 - right,
            y2: self.y2 - top,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        pdf_writer::Rect::from(*r)
    }
}

impl From<pdf_writer::Rect> for Rect {
    fn from(r: pdf_writer::Rect) -> Self {
        Rect {
            x1: Pt(r.x1),
            y1: Pt(r.y1),
            x2: Pt(r.x2),
            y2: Pt(r.y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xywh_accessors() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.x(), Pt(1.0));
        assert_eq!(r.y(), Pt(2.0));
        assert_eq!(r.width(), Pt(3.0));
        assert_eq!(r.height(), Pt(4.0));
        assert_eq!(r.x2, Pt(4.0));
        assert_eq!(r.y2, Pt(6.0));
    }

    #[test]
    fn inset_shrinks_each_side() {
        let r = Rect::new(0, 0, 100, 100).inset(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0));
        assert_eq!(r, Rect::new(4, 3, 94, 96));
    }
}
