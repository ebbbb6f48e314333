//! Cross-axis positioning of row and column children

use crate::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::alignment_line::AlignmentLine;
use crate::axis::LayoutDirection;
use crate::measurable::Placeable;
use std::fmt;
use std::rc::Rc;

/// Where a child reports the line it wants to share with its siblings.
#[derive(Clone)]
pub enum AlignmentLineProvider {
    /// A named line the child's placeable reports.
    Fixed(AlignmentLine),
    /// A position computed from the measured child.
    Computed(Rc<dyn Fn(&dyn Placeable) -> Option<i32>>),
}

impl AlignmentLineProvider {
    pub fn computed(block: impl Fn(&dyn Placeable) -> Option<i32> + 'static) -> Self {
        AlignmentLineProvider::Computed(Rc::new(block))
    }

    /// Position of the line inside `placeable`, `None` when unspecified.
    pub fn calculate_position(&self, placeable: &dyn Placeable) -> Option<i32> {
        match self {
            AlignmentLineProvider::Fixed(line) => placeable.alignment_line(*line),
            AlignmentLineProvider::Computed(block) => block(placeable),
        }
    }
}

impl fmt::Debug for AlignmentLineProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentLineProvider::Fixed(line) => f.debug_tuple("Fixed").field(line).finish(),
            AlignmentLineProvider::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl PartialEq for AlignmentLineProvider {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AlignmentLineProvider::Fixed(a), AlignmentLineProvider::Fixed(b)) => a == b,
            (AlignmentLineProvider::Computed(a), AlignmentLineProvider::Computed(b)) => {
                Rc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

/// Positions a child inside the cross-axis space of a row or column.
#[derive(Clone, Debug, PartialEq)]
pub enum CrossAxisAlignment {
    /// Leading edge; flips in a right-to-left context.
    Start,
    /// Trailing edge; flips in a right-to-left context.
    End,
    /// Centered, rounding towards the leading edge.
    Center,
    /// Horizontal alignment reused for the cross axis of a column.
    Horizontal(HorizontalAlignment),
    /// Vertical alignment reused for the cross axis of a row.
    Vertical(VerticalAlignment),
    /// Lines the child up with siblings on a shared line.
    AlignmentLine(AlignmentLineProvider),
}

impl CrossAxisAlignment {
    /// Offset of a child that leaves `size` pixels of free cross space.
    ///
    /// `before_line` is the largest distance from the cross-axis start to the
    /// shared line over every sibling aligned by a line; other variants
    /// ignore it. A child that does not report its line is placed at `0`.
    pub fn align(
        &self,
        size: i32,
        layout_direction: LayoutDirection,
        placeable: &dyn Placeable,
        before_line: i32,
    ) -> i32 {
        match self {
            CrossAxisAlignment::Start => {
                if layout_direction.is_rtl() {
                    size
                } else {
                    0
                }
            }
            CrossAxisAlignment::End => {
                if layout_direction.is_rtl() {
                    0
                } else {
                    size
                }
            }
            CrossAxisAlignment::Center => size / 2,
            CrossAxisAlignment::Horizontal(alignment) => alignment.align(size, layout_direction),
            CrossAxisAlignment::Vertical(alignment) => alignment.align(size),
            CrossAxisAlignment::AlignmentLine(provider) => {
                match provider.calculate_position(placeable) {
                    Some(position) => {
                        let offset = before_line - position;
                        if layout_direction.is_rtl() {
                            size - offset
                        } else {
                            offset
                        }
                    }
                    None => 0,
                }
            }
        }
    }

    /// True for alignment relative to a sibling-shared line.
    pub fn is_relative(&self) -> bool {
        matches!(self, CrossAxisAlignment::AlignmentLine(_))
    }

    /// Position of the shared line inside `placeable`, if this alignment uses one.
    pub fn calculate_alignment_line_position(&self, placeable: &dyn Placeable) -> Option<i32> {
        match self {
            CrossAxisAlignment::AlignmentLine(provider) => provider.calculate_position(placeable),
            _ => None,
        }
    }
}

impl From<HorizontalAlignment> for CrossAxisAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        CrossAxisAlignment::Horizontal(alignment)
    }
}

impl From<VerticalAlignment> for CrossAxisAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        CrossAxisAlignment::Vertical(alignment)
    }
}

impl From<AlignmentLine> for CrossAxisAlignment {
    fn from(line: AlignmentLine) -> Self {
        CrossAxisAlignment::AlignmentLine(AlignmentLineProvider::Fixed(line))
    }
}

#[cfg(test)]
#[path = "tests/cross_axis_alignment_tests.rs"]
mod tests;
