//! Named reference lines that siblings can line up on

use crate::axis::Axis;

/// How a container combines the positions reported by several children for
/// the same line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentLineMerge {
    /// Keep the smallest position (e.g. the first baseline).
    Min,
    /// Keep the largest position (e.g. the last baseline).
    Max,
}

/// A named offset inside a measured child, such as a text baseline.
///
/// A line with [`Axis::Horizontal`] runs left to right, so its position is a
/// y offset and it is used to align children of a row. A vertical line
/// reports an x offset and aligns children of a column.
///
/// Ids `0` and `1` belong to [`FIRST_BASELINE`](Self::FIRST_BASELINE) and
/// [`LAST_BASELINE`](Self::LAST_BASELINE).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlignmentLine {
    id: u32,
    axis: Axis,
    merge: AlignmentLineMerge,
}

impl AlignmentLine {
    pub const FIRST_BASELINE: Self = Self::horizontal(0, AlignmentLineMerge::Min);

    pub const LAST_BASELINE: Self = Self::horizontal(1, AlignmentLineMerge::Max);

    pub const fn horizontal(id: u32, merge: AlignmentLineMerge) -> Self {
        Self {
            id,
            axis: Axis::Horizontal,
            merge,
        }
    }

    pub const fn vertical(id: u32, merge: AlignmentLineMerge) -> Self {
        Self {
            id,
            axis: Axis::Vertical,
            merge,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Direction the line runs in.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Combines two positions of this line reported by different children.
    pub fn merge(&self, first: i32, second: i32) -> i32 {
        match self.merge {
            AlignmentLineMerge::Min => first.min(second),
            AlignmentLineMerge::Max => first.max(second),
        }
    }
}
