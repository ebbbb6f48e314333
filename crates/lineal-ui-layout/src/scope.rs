//! Scope traits that attach row/column parent data to children

use crate::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::alignment_line::AlignmentLine;
use crate::axis::Axis;
use crate::cross_axis_alignment::{AlignmentLineProvider, CrossAxisAlignment};
use crate::error::{LayoutError, Result};
use crate::measurable::{Placeable, RowColumnParentData};

/// A single parent-data attachment produced by [`RowScope`] or [`ColumnScope`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParentDataModifier {
    Weight { weight: f32, fill: bool },
    CrossAxisAlignment(CrossAxisAlignment),
}

impl ParentDataModifier {
    /// Writes this attachment into `data`, replacing the same field.
    pub fn apply(&self, data: &mut RowColumnParentData) {
        match self {
            ParentDataModifier::Weight { weight, fill } => data.set_weight(*weight, *fill),
            ParentDataModifier::CrossAxisAlignment(alignment) => {
                data.set_cross_axis_alignment(alignment.clone())
            }
        }
    }
}

impl RowColumnParentData {
    /// Folds a modifier chain in order; a later attachment wins.
    pub fn from_modifiers<'a>(modifiers: impl IntoIterator<Item = &'a ParentDataModifier>) -> Self {
        let mut data = Self::default();
        for modifier in modifiers {
            modifier.apply(&mut data);
        }
        data
    }
}

fn checked_weight(weight: f32, fill: bool) -> Result<ParentDataModifier> {
    if weight.is_finite() && weight > 0.0 {
        Ok(ParentDataModifier::Weight { weight, fill })
    } else {
        Err(LayoutError::InvalidWeight(weight))
    }
}

// A shared line offsets children on the cross axis, so it runs along the main axis.
fn checked_line(line: AlignmentLine, main_axis: Axis, container: &'static str) -> Result<ParentDataModifier> {
    if line.axis() == main_axis {
        Ok(ParentDataModifier::CrossAxisAlignment(line.into()))
    } else {
        Err(LayoutError::MismatchedAlignmentLine { line, container })
    }
}

fn or_panic(result: Result<ParentDataModifier>) -> ParentDataModifier {
    match result {
        Ok(modifier) => modifier,
        Err(err) => panic!("{err}"),
    }
}

/// Attachments available to children of a row.
pub trait RowScope {
    /// Sizes the child proportionally to `weight` from the space left after
    /// unweighted siblings. Panics unless `weight` is finite and positive.
    fn weight(&self, weight: f32, fill: bool) -> ParentDataModifier {
        or_panic(self.try_weight(weight, fill))
    }

    fn try_weight(&self, weight: f32, fill: bool) -> Result<ParentDataModifier> {
        checked_weight(weight, fill)
    }

    /// Overrides the row's vertical alignment for this child.
    fn align(&self, alignment: VerticalAlignment) -> ParentDataModifier {
        ParentDataModifier::CrossAxisAlignment(alignment.into())
    }

    /// Aligns the child with siblings on a horizontal `line`.
    fn align_by(&self, line: AlignmentLine) -> ParentDataModifier {
        or_panic(self.try_align_by(line))
    }

    fn try_align_by(&self, line: AlignmentLine) -> Result<ParentDataModifier> {
        checked_line(line, Axis::Horizontal, "Row")
    }

    /// Aligns the child with siblings on a position computed from its placeable.
    fn align_by_block<F>(&self, block: F) -> ParentDataModifier
    where
        F: Fn(&dyn Placeable) -> Option<i32> + 'static,
    {
        ParentDataModifier::CrossAxisAlignment(CrossAxisAlignment::AlignmentLine(
            AlignmentLineProvider::computed(block),
        ))
    }

    fn align_by_baseline(&self) -> ParentDataModifier {
        self.align_by(AlignmentLine::FIRST_BASELINE)
    }
}

/// Attachments available to children of a column.
pub trait ColumnScope {
    /// Sizes the child proportionally to `weight` from the space left after
    /// unweighted siblings. Panics unless `weight` is finite and positive.
    fn weight(&self, weight: f32, fill: bool) -> ParentDataModifier {
        or_panic(self.try_weight(weight, fill))
    }

    fn try_weight(&self, weight: f32, fill: bool) -> Result<ParentDataModifier> {
        checked_weight(weight, fill)
    }

    /// Overrides the column's horizontal alignment for this child.
    fn align(&self, alignment: HorizontalAlignment) -> ParentDataModifier {
        ParentDataModifier::CrossAxisAlignment(alignment.into())
    }

    /// Aligns the child with siblings on a vertical `line`.
    fn align_by(&self, line: AlignmentLine) -> ParentDataModifier {
        or_panic(self.try_align_by(line))
    }

    fn try_align_by(&self, line: AlignmentLine) -> Result<ParentDataModifier> {
        checked_line(line, Axis::Vertical, "Column")
    }

    fn align_by_block<F>(&self, block: F) -> ParentDataModifier
    where
        F: Fn(&dyn Placeable) -> Option<i32> + 'static,
    {
        ParentDataModifier::CrossAxisAlignment(CrossAxisAlignment::AlignmentLine(
            AlignmentLineProvider::computed(block),
        ))
    }
}

/// Concrete implementation of RowScope.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowScopeImpl;

impl RowScope for RowScopeImpl {}

/// Concrete implementation of ColumnScope.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnScopeImpl;

impl ColumnScope for ColumnScopeImpl {}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
