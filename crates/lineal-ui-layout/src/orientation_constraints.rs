//! Constraints expressed along a main and a cross axis

use crate::axis::Axis;
use crate::constraints::Constraints;

/// [`Constraints`] reprojected onto the main and cross axis of a linear layout.
///
/// Rows and columns share a single measuring algorithm by working in these
/// terms: for [`Axis::Horizontal`] the main axis is the width, for
/// [`Axis::Vertical`] it is the height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationIndependentConstraints {
    pub main_axis_min: i32,
    pub main_axis_max: i32,
    pub cross_axis_min: i32,
    pub cross_axis_max: i32,
}

impl OrientationIndependentConstraints {
    pub const fn new(
        main_axis_min: i32,
        main_axis_max: i32,
        cross_axis_min: i32,
        cross_axis_max: i32,
    ) -> Self {
        Self {
            main_axis_min,
            main_axis_max,
            cross_axis_min,
            cross_axis_max,
        }
    }

    /// Projects `constraints` for a layout whose main axis is `orientation`.
    pub fn from_constraints(constraints: Constraints, orientation: Axis) -> Self {
        match orientation {
            Axis::Horizontal => Self::new(
                constraints.min_width(),
                constraints.max_width(),
                constraints.min_height(),
                constraints.max_height(),
            ),
            Axis::Vertical => Self::new(
                constraints.min_height(),
                constraints.max_height(),
                constraints.min_width(),
                constraints.max_width(),
            ),
        }
    }

    /// Exact inverse of [`from_constraints`](Self::from_constraints).
    ///
    /// Panics if the bounds do not form valid [`Constraints`].
    pub fn to_constraints(&self, orientation: Axis) -> Constraints {
        match orientation {
            Axis::Horizontal => Constraints::new(
                self.main_axis_min,
                self.main_axis_max,
                self.cross_axis_min,
                self.cross_axis_max,
            ),
            Axis::Vertical => Constraints::new(
                self.cross_axis_min,
                self.cross_axis_max,
                self.main_axis_min,
                self.main_axis_max,
            ),
        }
    }

    /// Forces every child to the full cross size when that size is finite.
    pub fn stretch_cross_axis(self) -> Self {
        if self.has_bounded_cross_axis() {
            Self {
                cross_axis_min: self.cross_axis_max,
                ..self
            }
        } else {
            self
        }
    }

    /// Replaces the main-axis bounds.
    pub fn with_main_axis(self, main_axis_min: i32, main_axis_max: i32) -> Self {
        Self {
            main_axis_min,
            main_axis_max,
            ..self
        }
    }

    /// Zeroes both minimums.
    pub fn loosen(self) -> Self {
        Self {
            main_axis_min: 0,
            cross_axis_min: 0,
            ..self
        }
    }

    #[inline]
    pub fn has_bounded_main_axis(&self) -> bool {
        self.main_axis_max != Constraints::INFINITY
    }

    #[inline]
    pub fn has_bounded_cross_axis(&self) -> bool {
        self.cross_axis_max != Constraints::INFINITY
    }
}

#[cfg(test)]
#[path = "tests/orientation_constraints_tests.rs"]
mod tests;
