//! Intrinsic measurement APIs

use crate::axis::Axis;
use crate::constraints::Constraints;
use crate::measurable::Measurable;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};

/// Specifies how to size a component based on its intrinsic measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntrinsicSize {
    /// Use the minimum intrinsic size of the content.
    Min,
    /// Use the maximum intrinsic size of the content.
    Max,
}

/// One of the four intrinsic questions a [`Measurable`] answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicQuery {
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
}

impl IntrinsicQuery {
    /// The widest (or tallest) question along `axis`.
    pub fn max_along(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => IntrinsicQuery::MaxWidth,
            Axis::Vertical => IntrinsicQuery::MaxHeight,
        }
    }

    /// Axis of the answer: widths are horizontal, heights vertical.
    pub fn axis(self) -> Axis {
        match self {
            IntrinsicQuery::MinWidth | IntrinsicQuery::MaxWidth => Axis::Horizontal,
            IntrinsicQuery::MinHeight | IntrinsicQuery::MaxHeight => Axis::Vertical,
        }
    }

    /// Asks `measurable` this question for the given opposite-axis extent.
    pub fn query(self, measurable: &dyn Measurable, extent: i32) -> i32 {
        match self {
            IntrinsicQuery::MinWidth => measurable.min_intrinsic_width(extent),
            IntrinsicQuery::MaxWidth => measurable.max_intrinsic_width(extent),
            IntrinsicQuery::MinHeight => measurable.min_intrinsic_height(extent),
            IntrinsicQuery::MaxHeight => measurable.max_intrinsic_height(extent),
        }
    }
}

/// Memoizes intrinsic answers for a single node during one layout pass.
///
/// Entries are keyed by query and extent. The owner must call
/// [`invalidate`](Self::invalidate) before each pass; nothing expires on its own.
#[derive(Debug, Default)]
pub struct IntrinsicCache {
    entries: RefCell<SmallVec<[(IntrinsicQuery, i32, i32); 4]>>,
    hits: Cell<usize>,
}

impl IntrinsicCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached answer or runs `compute` and stores its result.
    pub fn get_or_compute(&self, query: IntrinsicQuery, extent: i32, compute: impl FnOnce() -> i32) -> i32 {
        let cached = self
            .entries
            .borrow()
            .iter()
            .find(|(q, e, _)| *q == query && *e == extent)
            .map(|(_, _, value)| *value);
        if let Some(value) = cached {
            self.hits.set(self.hits.get() + 1);
            return value;
        }

        // `compute` may recurse into other nodes' caches, so no borrow is held here.
        let value = compute();
        self.entries.borrow_mut().push((query, extent, value));
        value
    }

    pub fn invalidate(&self) {
        self.entries.borrow_mut().clear();
        self.hits.set(0);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Number of lookups answered from the cache since the last invalidation.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

fn weight_of(child: &dyn Measurable) -> f32 {
    child
        .row_column_parent_data()
        .map(|data| data.weight())
        .unwrap_or(0.0)
}

fn total_spacing(count: usize, spacing: i32) -> i32 {
    let gaps = i32::try_from(count.saturating_sub(1)).unwrap_or(i32::MAX);
    spacing.saturating_mul(gaps)
}

/// Intrinsic size of a row or column along its main axis.
///
/// Unweighted children contribute their own size. Weighted children are sized
/// so that the largest size-per-weight among them holds for every weighted
/// child.
pub fn intrinsic_main_axis_size(
    children: &[Box<dyn Measurable>],
    main_axis_size: impl Fn(&dyn Measurable, i32) -> i32,
    cross_axis_available: i32,
    main_axis_spacing: i32,
) -> i32 {
    if children.is_empty() {
        return 0;
    }

    let mut weight_unit_space = 0;
    let mut fixed_space = 0i32;
    let mut total_weight = 0.0f32;
    for child in children {
        let child = child.as_ref();
        let weight = weight_of(child);
        let size = main_axis_size(child, cross_axis_available);
        if weight == 0.0 {
            fixed_space = fixed_space.saturating_add(size);
        } else if weight > 0.0 {
            total_weight += weight;
            weight_unit_space = weight_unit_space.max((size as f32 / weight).round() as i32);
        }
    }

    ((weight_unit_space as f32 * total_weight).round() as i32)
        .saturating_add(fixed_space)
        .saturating_add(total_spacing(children.len(), main_axis_spacing))
}

/// Intrinsic size of a row or column across its main axis.
///
/// Unweighted children take their main-axis size greedily out of
/// `main_axis_available`; weighted children then report their cross size for
/// their share of what is left.
pub fn intrinsic_cross_axis_size(
    children: &[Box<dyn Measurable>],
    main_axis_size: impl Fn(&dyn Measurable, i32) -> i32,
    cross_axis_size: impl Fn(&dyn Measurable, i32) -> i32,
    main_axis_available: i32,
    main_axis_spacing: i32,
) -> i32 {
    if children.is_empty() {
        return 0;
    }

    let unbounded = main_axis_available == Constraints::INFINITY;
    let mut fixed_space = total_spacing(children.len(), main_axis_spacing).min(main_axis_available);
    let mut cross_axis_max = 0;
    let mut total_weight = 0.0f32;
    for child in children {
        let child = child.as_ref();
        let weight = weight_of(child);
        if weight == 0.0 {
            let space_available = if unbounded {
                Constraints::INFINITY
            } else {
                main_axis_available.saturating_sub(fixed_space)
            };
            let main = main_axis_size(child, Constraints::INFINITY).min(space_available);
            fixed_space = fixed_space.saturating_add(main);
            cross_axis_max = cross_axis_max.max(cross_axis_size(child, main));
        } else if weight > 0.0 {
            total_weight += weight;
        }
    }

    let weight_unit_space = if total_weight == 0.0 {
        Some(0.0)
    } else if unbounded {
        None
    } else {
        let leftover = main_axis_available.saturating_sub(fixed_space).max(0);
        Some((leftover as f32 / total_weight).round())
    };

    for child in children {
        let child = child.as_ref();
        let weight = weight_of(child);
        if weight > 0.0 {
            let main = match weight_unit_space {
                Some(unit) => (unit * weight).round() as i32,
                None => Constraints::INFINITY,
            };
            cross_axis_max = cross_axis_max.max(cross_axis_size(child, main));
        }
    }
    cross_axis_max
}

#[cfg(test)]
#[path = "tests/intrinsics_tests.rs"]
mod tests;
