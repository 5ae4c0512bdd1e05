use crate::units::Pt;

/// One value for each side of a box, listed clockwise starting at the top (in the
/// same order as CSS margins)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

/// Margins are used when laying out objects on a page. There is no control
/// preventing objects on pages to overflow the margins; they are there
/// as guidelines for layout functions. Additionally, the margins are applied
/// to [`Page`](crate::Page)s to determine the `ArtBox` attribute of each page in the
/// generated PDF
pub type Margins = Sides<Pt>;

impl<T> Sides<T> {
    /// Create sides by specifying individual components in a clockwise fashion
    /// starting at the top
    pub fn trbl(top: T, right: T, bottom: T, left: T) -> Sides<T> {
        Sides {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Sides<U> {
        Sides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

impl<T: Clone> Sides<T> {
    /// Create sides where all values are equal
    pub fn all(value: T) -> Sides<T> {
        Sides {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Create sides by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) sides
    pub fn symmetric(vertical: T, horizontal: T) -> Sides<T> {
        Sides {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl Sides<bool> {
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }

    pub fn every(&self) -> bool {
        self.top && self.right && self.bottom && self.left
    }
}

impl Margins {
    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Sides::all(Pt(0.0))
    }
}

/// One value for each corner of a box, listed clockwise starting at the top left
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T> Corners<T> {
    pub fn new(top_left: T, top_right: T, bottom_right: T, bottom_left: T) -> Corners<T> {
        Corners {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Corners<U> {
        Corners {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }
}

impl<T: Clone> Corners<T> {
    pub fn all(value: T) -> Corners<T> {
        Corners {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_right: value.clone(),
            bottom_left: value,
        }
    }
}
