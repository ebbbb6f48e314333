//! One-dimensional alignment used to position content within free space

use crate::axis::LayoutDirection;

/// Alignment along the horizontal axis.
///
/// `Start` and `End` are relative: they swap sides in a right-to-left context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge.
    Start,
    /// Align children to the horizontal center.
    CenterHorizontally,
    /// Align children to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the offset that aligns content inside `size` pixels of free space.
    pub fn align(&self, size: i32, layout_direction: LayoutDirection) -> i32 {
        match (self, layout_direction) {
            (HorizontalAlignment::Start, LayoutDirection::Ltr)
            | (HorizontalAlignment::End, LayoutDirection::Rtl) => 0,
            (HorizontalAlignment::Start, LayoutDirection::Rtl)
            | (HorizontalAlignment::End, LayoutDirection::Ltr) => size,
            (HorizontalAlignment::CenterHorizontally, _) => size / 2,
        }
    }

    /// The alignment that lands on the same side once the axis is flipped.
    pub fn mirrored(self) -> Self {
        match self {
            HorizontalAlignment::Start => HorizontalAlignment::End,
            HorizontalAlignment::CenterHorizontally => HorizontalAlignment::CenterHorizontally,
            HorizontalAlignment::End => HorizontalAlignment::Start,
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Align children to the top edge.
    Top,
    /// Align children to the vertical center.
    CenterVertically,
    /// Align children to the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// Computes the offset that aligns content inside `size` pixels of free space.
    pub fn align(&self, size: i32) -> i32 {
        match self {
            VerticalAlignment::Top => 0,
            VerticalAlignment::CenterVertically => size / 2,
            VerticalAlignment::Bottom => size,
        }
    }
}
