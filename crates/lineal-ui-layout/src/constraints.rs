//! Layout constraints system

use crate::error::{LayoutError, Result};
use lineal_ui_unit::IntSize;

/// Constraints used during layout measurement.
///
/// Each bound is a non-negative pixel count; a maximum may also be
/// [`Constraints::INFINITY`]. Minimums never exceed maximums and are never
/// infinite. Values are immutable once built; narrowing produces a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraints {
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
}

/// `max - used`, keeping an unbounded `max` unbounded and never going below zero.
#[inline]
pub fn remaining_space(max: i32, used: i32) -> i32 {
    if max == Constraints::INFINITY {
        Constraints::INFINITY
    } else {
        max.saturating_sub(used).max(0)
    }
}

fn check_axis(axis: &'static str, min: i32, max: i32) -> Result<()> {
    if min < 0 || max < 0 {
        return Err(LayoutError::NegativeBound { axis, min, max });
    }
    if min == Constraints::INFINITY {
        return Err(LayoutError::InfiniteMin { axis });
    }
    if min > max {
        return Err(LayoutError::MinExceedsMax { axis, min, max });
    }
    Ok(())
}

impl Constraints {
    /// Sentinel for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    /// Zero minimums, unbounded maximums.
    pub const UNBOUNDED: Self = Self {
        min_width: 0,
        max_width: Self::INFINITY,
        min_height: 0,
        max_height: Self::INFINITY,
    };

    /// Creates constraints, panicking on invalid bounds.
    pub fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        match Self::try_new(min_width, max_width, min_height, max_height) {
            Ok(constraints) => constraints,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates constraints, rejecting negative bounds, infinite minimums and `min > max`.
    pub fn try_new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Result<Self> {
        check_axis("width", min_width, max_width)?;
        check_axis("height", min_height, max_height)?;
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// Creates constraints with exact width and height.
    pub fn tight(width: i32, height: i32) -> Self {
        Self::new(width, width, height, height)
    }

    /// Exact width, unbounded height.
    pub fn tight_width(width: i32) -> Self {
        Self::new(width, width, 0, Self::INFINITY)
    }

    /// Exact height, unbounded width.
    pub fn tight_height(height: i32) -> Self {
        Self::new(0, Self::INFINITY, height, height)
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self::new(0, max_width, 0, max_height)
    }

    #[inline]
    pub const fn min_width(&self) -> i32 {
        self.min_width
    }

    #[inline]
    pub const fn max_width(&self) -> i32 {
        self.max_width
    }

    #[inline]
    pub const fn min_height(&self) -> i32 {
        self.min_height
    }

    #[inline]
    pub const fn max_height(&self) -> i32 {
        self.max_height
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.has_tight_width() && self.has_tight_height()
    }

    /// Returns true if the only satisfying size is zero on some axis.
    pub fn is_zero(&self) -> bool {
        self.max_width == 0 || self.max_height == 0
    }

    /// Returns true if all bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    #[inline]
    pub fn has_tight_width(&self) -> bool {
        self.min_width == self.max_width
    }

    #[inline]
    pub fn has_tight_height(&self) -> bool {
        self.min_height == self.max_height
    }

    pub fn constrain_width(&self, width: i32) -> i32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: i32) -> i32 {
        height.clamp(self.min_height, self.max_height)
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: i32, height: i32) -> IntSize {
        IntSize::new(self.constrain_width(width), self.constrain_height(height))
    }

    pub fn constrain_size(&self, size: IntSize) -> IntSize {
        self.constrain(size.width, size.height)
    }

    /// Returns true if `size` satisfies these constraints.
    pub fn is_satisfied_by(&self, size: IntSize) -> bool {
        (self.min_width..=self.max_width).contains(&size.width)
            && (self.min_height..=self.max_height).contains(&size.height)
    }

    /// Narrows `other` so it lies within these constraints.
    ///
    /// Every bound of `other` is coerced into this range, so the result is
    /// always valid even when the two ranges do not overlap.
    pub fn intersect(&self, other: Constraints) -> Self {
        Self {
            min_width: self.constrain_width(other.min_width),
            max_width: self.constrain_width(other.max_width),
            min_height: self.constrain_height(other.min_height),
            max_height: self.constrain_height(other.max_height),
        }
    }

    /// Creates new constraints with tightened width (min = max = given width).
    pub fn tighten_width(self, width: i32) -> Self {
        Self::new(width, width, self.min_height, self.max_height)
    }

    /// Creates new constraints with tightened height (min = max = given height).
    pub fn tighten_height(self, height: i32) -> Self {
        Self::new(self.min_width, self.max_width, height, height)
    }

    /// Creates new constraints with the given width bounds.
    pub fn copy_with_width(self, min_width: i32, max_width: i32) -> Self {
        Self::new(min_width, max_width, self.min_height, self.max_height)
    }

    /// Creates new constraints with the given height bounds.
    pub fn copy_with_height(self, min_height: i32, max_height: i32) -> Self {
        Self::new(self.min_width, self.max_width, min_height, max_height)
    }

    /// Deflates constraints by the given amount on each axis.
    /// This is useful for applying padding before measuring children.
    /// Unbounded maximums stay unbounded.
    pub fn deflate(self, horizontal: i32, vertical: i32) -> Self {
        Self {
            min_width: self.min_width.saturating_sub(horizontal).max(0),
            max_width: remaining_space(self.max_width, horizontal),
            min_height: self.min_height.saturating_sub(vertical).max(0),
            max_height: remaining_space(self.max_height, vertical),
        }
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            ..self
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
