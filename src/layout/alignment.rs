/// How the lines of a paragraph are placed within its box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    #[default]
    Left,
    Centered,
    Right,
    /// Stretch the gaps between words so that every line but the last fills the
    /// full width
    Justified,
}

/// Where a box sits vertically within the space it was given
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Where a box sits horizontally within the space it was given
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Centered,
    Right,
}
