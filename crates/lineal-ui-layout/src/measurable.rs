//! Core layout traits and types shared by row/column layouts and their hosts.

use crate::alignment_line::AlignmentLine;
use crate::axis::LayoutDirection;
use crate::constraints::Constraints;
use crate::cross_axis_alignment::CrossAxisAlignment;
use lineal_ui_unit::{Density, Dp, IntSize};
use std::fmt;

/// Identifier of a layout node in the host tree.
pub type NodeId = usize;

/// Per-child attributes a row or column reads while measuring.
///
/// Attached by the parent-data scopes ([`RowScope`](crate::RowScope),
/// [`ColumnScope`](crate::ColumnScope)); the child never sets these itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RowColumnParentData {
    weight: f32,
    fill: bool,
    cross_axis_alignment: Option<CrossAxisAlignment>,
}

impl RowColumnParentData {
    /// Share of leftover main-axis space. `0.0` means the child is not weighted.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Whether a weighted child must occupy its whole share.
    pub fn fill(&self) -> bool {
        self.fill
    }

    /// Per-child override of the container's cross-axis alignment.
    pub fn cross_axis_alignment(&self) -> Option<&CrossAxisAlignment> {
        self.cross_axis_alignment.as_ref()
    }

    pub fn has_weight(&self) -> bool {
        self.weight > 0.0
    }

    /// True if the child lines up with its siblings on an alignment line.
    pub fn is_relative(&self) -> bool {
        self.cross_axis_alignment
            .as_ref()
            .is_some_and(CrossAxisAlignment::is_relative)
    }

    pub(crate) fn set_weight(&mut self, weight: f32, fill: bool) {
        debug_assert!(weight > 0.0, "weights are validated by the scopes");
        self.weight = weight;
        self.fill = fill;
    }

    pub(crate) fn set_cross_axis_alignment(&mut self, alignment: CrossAxisAlignment) {
        self.cross_axis_alignment = Some(alignment);
    }
}

impl Default for RowColumnParentData {
    fn default() -> Self {
        Self {
            weight: 0.0,
            fill: true,
            cross_axis_alignment: None,
        }
    }
}

/// Object capable of measuring a layout child and exposing intrinsic sizes.
pub trait Measurable {
    /// Measures the child with the provided constraints, returning a [`Placeable`].
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable>;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: i32) -> i32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: i32) -> i32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: i32) -> i32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: i32) -> i32;

    /// Returns row/column parent data if an ancestor attached any.
    /// Default implementation returns None (no weight, container alignment).
    fn row_column_parent_data(&self) -> Option<RowColumnParentData> {
        None
    }
}

/// Result of running a measurement pass for a single child.
pub trait Placeable {
    /// Places the child at the provided coordinates relative to its parent.
    fn place(&self, x: i32, y: i32);

    /// Returns the measured width of the child.
    fn width(&self) -> i32;

    /// Returns the measured height of the child.
    fn height(&self) -> i32;

    /// Returns the identifier for the underlying layout node.
    fn node_id(&self) -> NodeId;

    /// Position of `line` inside the child, or `None` when the child does not
    /// provide it.
    fn alignment_line(&self, _line: AlignmentLine) -> Option<i32> {
        None
    }
}

/// Scope for measurement operations.
pub trait MeasureScope {
    /// Returns the current density for converting Dp to pixels.
    fn density(&self) -> f32 {
        1.0
    }

    /// Returns the current font scale.
    fn font_scale(&self) -> f32 {
        1.0
    }

    /// Reading direction of the content being measured.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }

    fn to_density(&self) -> Density {
        Density::with_font_scale(self.density(), self.font_scale())
    }

    fn round_to_px(&self, dp: Dp) -> i32 {
        self.to_density().round_to_px(dp)
    }
}

/// Plain [`MeasureScope`] carrying a density and a layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutContext {
    pub density: Density,
    pub layout_direction: LayoutDirection,
}

impl LayoutContext {
    pub fn new(density: Density, layout_direction: LayoutDirection) -> Self {
        Self {
            density,
            layout_direction,
        }
    }

    pub fn rtl() -> Self {
        Self::new(Density::default(), LayoutDirection::Rtl)
    }
}

impl MeasureScope for LayoutContext {
    fn density(&self) -> f32 {
        self.density.density
    }

    fn font_scale(&self) -> f32 {
        self.density.font_scale
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }
}

/// Policy responsible for measuring and placing children.
pub trait MeasurePolicy {
    /// Runs the measurement pass with the provided children and constraints.
    ///
    /// Nothing is placed until [`MeasureResult::place_children`] runs.
    fn measure(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult;

    /// Computes the minimum intrinsic width of this policy.
    fn min_intrinsic_width(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        height: i32,
    ) -> i32;

    /// Computes the maximum intrinsic width of this policy.
    fn max_intrinsic_width(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        height: i32,
    ) -> i32;

    /// Computes the minimum intrinsic height of this policy.
    fn min_intrinsic_height(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        width: i32,
    ) -> i32;

    /// Computes the maximum intrinsic height of this policy.
    fn max_intrinsic_height(
        &self,
        scope: &dyn MeasureScope,
        measurables: &[Box<dyn Measurable>],
        width: i32,
    ) -> i32;

    fn debug_name(&self) -> &str;
}

/// Result of a measurement operation.
///
/// Owns the measured children until [`place_children`](Self::place_children)
/// hands each one its final position.
pub struct MeasureResult {
    pub size: IntSize,
    pub placements: Vec<Placement>,
    placeables: Vec<Box<dyn Placeable>>,
}

impl MeasureResult {
    /// `placements` and `placeables` pair up by index.
    pub fn new(size: IntSize, placements: Vec<Placement>, placeables: Vec<Box<dyn Placeable>>) -> Self {
        assert_eq!(
            placements.len(),
            placeables.len(),
            "every measured child needs exactly one placement"
        );
        Self {
            size,
            placements,
            placeables,
        }
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Places every child at its computed position, in child order.
    pub fn place_children(&self) {
        for (placeable, placement) in self.placeables.iter().zip(&self.placements) {
            placeable.place(placement.x, placement.y);
        }
    }

    /// The container's own position for `line`, merged from every child that
    /// provides it and offset by where that child sits.
    pub fn alignment_line(&self, line: AlignmentLine) -> Option<i32> {
        self.placeables
            .iter()
            .zip(&self.placements)
            .filter_map(|(placeable, placement)| {
                placeable.alignment_line(line).map(|position| {
                    if line.axis().is_horizontal() {
                        position + placement.y
                    } else {
                        position + placement.x
                    }
                })
            })
            .reduce(|merged, position| line.merge(merged, position))
    }
}

impl fmt::Debug for MeasureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasureResult")
            .field("size", &self.size)
            .field("placements", &self.placements)
            .finish_non_exhaustive()
    }
}

/// Placement information for a measured child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub node_id: NodeId,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(node_id: NodeId, x: i32, y: i32) -> Self {
        Self { node_id, x, y }
    }
}
