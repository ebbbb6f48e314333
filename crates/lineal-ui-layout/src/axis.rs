use lineal_ui_unit::IntSize;

/// Represents the primary axis of a linear layout (Row or Column).
///
/// [`RowColumnMeasurePolicy`](crate::RowColumnMeasurePolicy) uses it to decide
/// which direction is the main axis (where children are laid out in sequence)
/// and which is the cross axis (where children are aligned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal main axis (Row).
    /// Main axis: left to right
    /// Cross axis: top to bottom
    Horizontal,

    /// Vertical main axis (Column).
    /// Main axis: top to bottom
    /// Cross axis: left to right
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Picks the main-axis extent out of a width/height pair.
    #[inline]
    pub fn main_size(self, width: i32, height: i32) -> i32 {
        match self {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }

    /// Picks the cross-axis extent out of a width/height pair.
    #[inline]
    pub fn cross_size(self, width: i32, height: i32) -> i32 {
        match self {
            Axis::Horizontal => height,
            Axis::Vertical => width,
        }
    }

    /// Builds a size from main/cross extents.
    #[inline]
    pub fn size(self, main: i32, cross: i32) -> IntSize {
        match self {
            Axis::Horizontal => IntSize::new(main, cross),
            Axis::Vertical => IntSize::new(cross, main),
        }
    }

    /// Converts main/cross offsets into an `(x, y)` pair.
    #[inline]
    pub fn position(self, main: i32, cross: i32) -> (i32, i32) {
        match self {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }
}

/// Reading direction of the surrounding content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
