//! Shared measure policy for rows and columns

use crate::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::arrangement::Arrangement;
use crate::axis::{Axis, LayoutDirection};
use crate::constraints::{remaining_space, Constraints};
use crate::cross_axis_alignment::CrossAxisAlignment;
use crate::intrinsics::{intrinsic_cross_axis_size, intrinsic_main_axis_size, IntrinsicQuery};
use crate::measurable::{
    Measurable, MeasurePolicy, MeasureResult, MeasureScope, Placeable, Placement, RowColumnParentData,
};
use crate::orientation_constraints::OrientationIndependentConstraints;
use smallvec::SmallVec;

/// How a row or column sizes itself across its main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// As small as the tallest (or widest) child allows.
    #[default]
    Wrap,
    /// The full cross-axis maximum when it is bounded.
    Expand,
}

/// Measure policy shared by rows (horizontal main axis) and columns (vertical main axis).
///
/// ## Measurement
///
/// 1. Unweighted children are measured first, in order, each with whatever
///    main-axis space the previous ones left.
/// 2. The main-axis space left after them (the container's max when bounded,
///    otherwise its min) is split between weighted children in proportion to
///    their weight. Rounding error is handed out one pixel at a time to the
///    earliest children, so the shares add up to the space exactly.
/// 3. Children are positioned by the [`Arrangement`] on the main axis and by
///    their [`CrossAxisAlignment`] on the cross axis. Children aligned by an
///    alignment line share one line position.
///
/// Children that do not fit are not clipped; they run past the container's
/// trailing edge.
#[derive(Clone, Debug, PartialEq)]
pub struct RowColumnMeasurePolicy {
    /// Main axis direction (Horizontal for Row, Vertical for Column)
    pub orientation: Axis,
    /// Arrangement along the main axis
    pub arrangement: Arrangement,
    /// Default alignment along the cross axis for children without their own
    pub cross_axis_alignment: CrossAxisAlignment,
    pub cross_axis_size: SizeMode,
}

// Per-child state for one measure pass.
struct ChildRecord {
    parent_data: RowColumnParentData,
    placeable: Option<Box<dyn Placeable>>,
}

impl RowColumnMeasurePolicy {
    pub fn new(orientation: Axis, arrangement: Arrangement, cross_axis_alignment: CrossAxisAlignment) -> Self {
        Self {
            orientation,
            arrangement,
            cross_axis_alignment,
            cross_axis_size: SizeMode::Wrap,
        }
    }

    /// Creates a policy for a row.
    pub fn row(horizontal_arrangement: Arrangement, vertical_alignment: VerticalAlignment) -> Self {
        Self::new(Axis::Horizontal, horizontal_arrangement, vertical_alignment.into())
    }

    /// Creates a policy for a column.
    pub fn column(vertical_arrangement: Arrangement, horizontal_alignment: HorizontalAlignment) -> Self {
        Self::new(Axis::Vertical, vertical_arrangement, horizontal_alignment.into())
    }

    pub fn with_cross_axis_size(mut self, cross_axis_size: SizeMode) -> Self {
        self.cross_axis_size = cross_axis_size;
        self
    }

    fn spacing_px(&self, scope: &dyn MeasureScope) -> i32 {
        scope.round_to_px(self.arrangement.spacing()).max(0)
    }

    fn main_axis_size(&self, placeable: &dyn Placeable) -> i32 {
        self.orientation.main_size(placeable.width(), placeable.height())
    }

    fn cross_axis_size_of(&self, placeable: &dyn Placeable) -> i32 {
        self.orientation.cross_size(placeable.width(), placeable.height())
    }

    /// Loose cross bounds from the parent, with the given main-axis bounds.
    fn child_constraints(
        &self,
        parent: OrientationIndependentConstraints,
        main_min: i32,
        main_max: i32,
    ) -> Constraints {
        parent
            .loosen()
            .with_main_axis(main_min, main_max)
            .to_constraints(self.orientation)
    }

    fn alignment_for<'a>(&'a self, parent_data: &'a RowColumnParentData) -> &'a CrossAxisAlignment {
        parent_data
            .cross_axis_alignment()
            .unwrap_or(&self.cross_axis_alignment)
    }

    fn intrinsic(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        query: IntrinsicQuery,
        extent: i32,
    ) -> i32 {
        let spacing = self.spacing_px(scope);
        if query.axis() == self.orientation {
            intrinsic_main_axis_size(measurables, |child, cross| query.query(child, cross), extent, spacing)
        } else {
            let main_query = IntrinsicQuery::max_along(self.orientation);
            intrinsic_cross_axis_size(
                measurables,
                |child, cross| main_query.query(child, cross),
                |child, main| query.query(child, main),
                extent,
                spacing,
            )
        }
    }
}

/// Splits `remaining` pixels between children in proportion to `weights`.
///
/// Each share is `round(remaining / total_weight * weight)`; the difference
/// between `remaining` and the sum of those rounded shares is then handed out
/// one pixel at a time from the first child on. A pixel is never taken from a
/// share that is already zero, so for non-negative `remaining` the shares add
/// up to exactly `remaining`. Negative `remaining` yields all zeros.
pub fn distribute_weighted_space(remaining: i32, weights: &[f32]) -> SmallVec<[i32; 8]> {
    let remaining = remaining.max(0);
    // f64 keeps each ideal share within half a pixel across the whole i32 range.
    let total_weight: f64 = weights.iter().map(|weight| f64::from(*weight)).sum();
    let weight_unit_space = if total_weight > 0.0 {
        f64::from(remaining) / total_weight
    } else {
        0.0
    };

    let ideal = |weight: f32| (weight_unit_space * f64::from(weight)).round() as i64;
    let mut remainder = remaining as i64 - weights.iter().map(|w| ideal(*w)).sum::<i64>();

    weights
        .iter()
        .map(|weight| {
            let share = ideal(*weight);
            let step = if share + remainder.signum() < 0 {
                0
            } else {
                remainder.signum()
            };
            remainder -= step;
            (share + step).clamp(0, i32::MAX as i64) as i32
        })
        .collect()
}

impl MeasurePolicy for RowColumnMeasurePolicy {
    fn measure(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let axis_constraints = OrientationIndependentConstraints::from_constraints(constraints, self.orientation);
        let main_min = axis_constraints.main_axis_min;
        let main_max = axis_constraints.main_axis_max;
        let cross_max = axis_constraints.cross_axis_max;
        let spacing = self.spacing_px(scope);

        let mut children: SmallVec<[ChildRecord; 8]> = measurables
            .iter()
            .map(|measurable| ChildRecord {
                parent_data: measurable.row_column_parent_data().unwrap_or_default(),
                placeable: None,
            })
            .collect();

        // Unweighted children, in order.
        let mut total_weight = 0.0f32;
        let mut weight_children_count = 0usize;
        let mut fixed_space = 0i32;
        let mut cross_axis_space = 0i32;
        let mut space_after_last_no_weight = 0i32;
        let mut any_align_by_line = false;

        for (measurable, child) in measurables.iter().zip(children.iter_mut()) {
            any_align_by_line |= self.alignment_for(&child.parent_data).is_relative();
            let weight = child.parent_data.weight();
            if weight > 0.0 {
                total_weight += weight;
                weight_children_count += 1;
                continue;
            }

            let remaining = remaining_space(main_max, fixed_space);
            let placeable = measurable.measure(self.child_constraints(axis_constraints, 0, remaining));
            let child_main = self.main_axis_size(placeable.as_ref());
            space_after_last_no_weight = spacing.min(remaining.saturating_sub(child_main).max(0));
            fixed_space = fixed_space
                .saturating_add(child_main)
                .saturating_add(space_after_last_no_weight);
            cross_axis_space = cross_axis_space.max(self.cross_axis_size_of(placeable.as_ref()));
            child.placeable = Some(placeable);
        }

        // Weighted children share what is left.
        let mut weighted_space = 0i32;
        if weight_children_count == 0 {
            fixed_space -= space_after_last_no_weight;
        } else {
            let target_space = if total_weight > 0.0 && axis_constraints.has_bounded_main_axis() {
                main_max
            } else {
                main_min
            };
            let weighted_spacing = spacing.saturating_mul((weight_children_count - 1) as i32);
            let remaining_to_target = target_space
                .saturating_sub(fixed_space)
                .saturating_sub(weighted_spacing);
            if remaining_to_target < 0 {
                log::debug!(
                    "{}: unweighted children overflow the main axis by {}px; weighted children get no space",
                    self.debug_name(),
                    -remaining_to_target
                );
            }

            let weights: SmallVec<[f32; 8]> = children
                .iter()
                .filter(|child| child.parent_data.has_weight())
                .map(|child| child.parent_data.weight())
                .collect();
            let shares = distribute_weighted_space(remaining_to_target, &weights);

            let weighted = measurables
                .iter()
                .zip(children.iter_mut())
                .filter(|(_, child)| child.parent_data.has_weight());
            for ((measurable, child), share) in weighted.zip(shares) {
                debug_assert!(child.parent_data.weight().is_finite());
                let main_min = if child.parent_data.fill() { share } else { 0 };
                let placeable = measurable.measure(self.child_constraints(axis_constraints, main_min, share));
                weighted_space = weighted_space.saturating_add(self.main_axis_size(placeable.as_ref()));
                cross_axis_space = cross_axis_space.max(self.cross_axis_size_of(placeable.as_ref()));
                child.placeable = Some(placeable);
            }

            weighted_space = weighted_space
                .saturating_add(weighted_spacing)
                .min(remaining_space(main_max, fixed_space))
                .max(0);
        }

        let placeables: SmallVec<[Box<dyn Placeable>; 8]> = children
            .iter_mut()
            .map(|child| child.placeable.take().expect("placeable missing"))
            .collect();

        // Shared alignment line.
        let mut before_line = 0i32;
        let mut after_line = 0i32;
        if any_align_by_line {
            for (child, placeable) in children.iter().zip(&placeables) {
                let alignment = self.alignment_for(&child.parent_data);
                if !alignment.is_relative() {
                    continue;
                }
                let cross = self.cross_axis_size_of(placeable.as_ref());
                let position = alignment.calculate_alignment_line_position(placeable.as_ref());
                before_line = before_line.max(position.unwrap_or(0));
                after_line = after_line.max(cross - position.unwrap_or(cross));
            }
        }

        let main_size = if total_weight > 0.0 && axis_constraints.has_bounded_main_axis() {
            main_max
        } else {
            fixed_space.saturating_add(weighted_space).max(main_min)
        };
        let expand_cross = self.cross_axis_size == SizeMode::Expand && axis_constraints.has_bounded_cross_axis();
        let cross_size = if expand_cross {
            cross_max
        } else {
            cross_axis_space
                .max(axis_constraints.cross_axis_min)
                .max(before_line.saturating_add(after_line))
        };
        let main_size = main_size.clamp(main_min, main_max);
        let cross_size = cross_size.clamp(axis_constraints.cross_axis_min, cross_max);

        // Main-axis offsets. A column always runs top to bottom.
        let (main_direction, cross_direction) = match self.orientation {
            Axis::Horizontal => (scope.layout_direction(), LayoutDirection::Ltr),
            Axis::Vertical => (LayoutDirection::Ltr, scope.layout_direction()),
        };
        let main_sizes: SmallVec<[i32; 8]> = placeables
            .iter()
            .map(|placeable| self.main_axis_size(placeable.as_ref()))
            .collect();
        let mut main_positions: SmallVec<[i32; 8]> = SmallVec::from_elem(0, main_sizes.len());
        self.arrangement.arrange_into(
            scope.to_density(),
            main_size,
            &main_sizes,
            main_direction,
            &mut main_positions,
        );

        let placements = children
            .iter()
            .zip(&placeables)
            .zip(main_positions)
            .map(|((child, placeable), main_position)| {
                let free_cross = cross_size - self.cross_axis_size_of(placeable.as_ref());
                let cross_position = self.alignment_for(&child.parent_data).align(
                    free_cross,
                    cross_direction,
                    placeable.as_ref(),
                    before_line,
                );
                let (x, y) = self.orientation.position(main_position, cross_position);
                Placement::new(placeable.node_id(), x, y)
            })
            .collect();

        let size = self.orientation.size(main_size, cross_size);
        log::trace!(
            "{} measured {} children under {:?}: size={:?}",
            self.debug_name(),
            measurables.len(),
            constraints,
            size
        );
        MeasureResult::new(size, placements, placeables.into_vec())
    }

    fn min_intrinsic_width(&self, scope: &dyn MeasureScope, measurables: &[Box<dyn Measurable>], height: i32) -> i32 {
        self.intrinsic(scope, measurables, IntrinsicQuery::MinWidth, height)
    }

    fn max_intrinsic_width(&self, scope: &dyn MeasureScope, measurables: &[Box<dyn Measurable>], height: i32) -> i32 {
        self.intrinsic(scope, measurables, IntrinsicQuery::MaxWidth, height)
    }

    fn min_intrinsic_height(&self, scope: &dyn MeasureScope, measurables: &[Box<dyn Measurable>], width: i32) -> i32 {
        self.intrinsic(scope, measurables, IntrinsicQuery::MinHeight, width)
    }

    fn max_intrinsic_height(&self, scope: &dyn MeasureScope, measurables: &[Box<dyn Measurable>], width: i32) -> i32 {
        self.intrinsic(scope, measurables, IntrinsicQuery::MaxHeight, width)
    }

    fn debug_name(&self) -> &str {
        match self.orientation {
            Axis::Horizontal => "Row",
            Axis::Vertical => "Column",
        }
    }
}

#[cfg(test)]
#[path = "tests/row_column_tests.rs"]
mod tests;
