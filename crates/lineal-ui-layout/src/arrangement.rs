//! Arrangement strategies for distributing children along the main axis

use crate::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::axis::LayoutDirection;
use lineal_ui_unit::{Density, Dp};
use smallvec::SmallVec;

/// Alignment of a whole [`Arrangement::FixedSpacing`] group inside leftover space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupAlignment {
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
}

impl GroupAlignment {
    /// Offset for the group given `size` pixels of leftover space.
    pub fn align(&self, size: i32, layout_direction: LayoutDirection) -> i32 {
        match self {
            GroupAlignment::Horizontal(alignment) => alignment.align(size, layout_direction),
            GroupAlignment::Vertical(alignment) => alignment.align(size),
        }
    }

    fn mirrored(self) -> Self {
        match self {
            GroupAlignment::Horizontal(alignment) => GroupAlignment::Horizontal(alignment.mirrored()),
            vertical => vertical,
        }
    }
}

impl From<HorizontalAlignment> for GroupAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        GroupAlignment::Horizontal(alignment)
    }
}

impl From<VerticalAlignment> for GroupAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        GroupAlignment::Vertical(alignment)
    }
}

/// Arrangement strategy matching Jetpack Compose's linear arrangements.
///
/// Offsets are computed left-to-right (or top-to-bottom). For a right-to-left
/// direction the sizes are reversed, the mirrored strategy runs, and the
/// offsets are reversed back; `Start` and `End` swap under mirroring, every
/// other strategy is its own mirror.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arrangement {
    /// Place children consecutively starting from the leading edge.
    Start,
    /// Place children so the last child touches the trailing edge.
    End,
    /// Place children so they are centered as a block.
    Center,
    /// Distribute the remaining space evenly between children.
    SpaceBetween,
    /// Distribute the remaining space before, after, and between children,
    /// with half-size gaps at both ends.
    SpaceAround,
    /// Distribute the remaining space before the first child, between children, and after the last child.
    SpaceEvenly,
    /// Insert a fixed amount of space between children, shrinking it when
    /// the container runs out of room.
    FixedSpacing {
        space: Dp,
        /// Whether the group reverses in a right-to-left context.
        rtl_mirror: bool,
        /// Places the packed group inside any leftover space.
        alignment: Option<GroupAlignment>,
    },
}

impl Arrangement {
    pub const TOP: Self = Arrangement::Start;

    pub const BOTTOM: Self = Arrangement::End;

    /// Creates an arrangement that inserts a fixed spacing between children.
    pub fn spaced_by(space: Dp) -> Self {
        Arrangement::FixedSpacing {
            space,
            rtl_mirror: true,
            alignment: None,
        }
    }

    /// Fixed spacing, with the packed group aligned inside leftover space.
    pub fn spaced_aligned(space: Dp, alignment: impl Into<GroupAlignment>) -> Self {
        Arrangement::FixedSpacing {
            space,
            rtl_mirror: true,
            alignment: Some(alignment.into()),
        }
    }

    /// Fixed spacing that keeps its left-to-right order in every direction.
    pub fn absolute_spaced_by(space: Dp) -> Self {
        Arrangement::FixedSpacing {
            space,
            rtl_mirror: false,
            alignment: None,
        }
    }

    /// Uniform space between adjacent children, used by intrinsic measurement.
    pub fn spacing(&self) -> Dp {
        match self {
            Arrangement::FixedSpacing { space, .. } => *space,
            _ => Dp::ZERO,
        }
    }

    /// The strategy that produces the same picture on a flipped axis.
    pub fn mirrored(&self) -> Self {
        match *self {
            Arrangement::Start => Arrangement::End,
            Arrangement::End => Arrangement::Start,
            Arrangement::FixedSpacing {
                space,
                rtl_mirror,
                alignment,
            } => Arrangement::FixedSpacing {
                space,
                rtl_mirror,
                alignment: alignment.map(GroupAlignment::mirrored),
            },
            other => other,
        }
    }

    fn reverses_in(&self, layout_direction: LayoutDirection) -> bool {
        match self {
            Arrangement::FixedSpacing { rtl_mirror, .. } => {
                *rtl_mirror && layout_direction.is_rtl()
            }
            _ => layout_direction.is_rtl(),
        }
    }

    /// Computes one offset per entry of `sizes`.
    pub fn arrange(
        &self,
        density: Density,
        total_size: i32,
        sizes: &[i32],
        layout_direction: LayoutDirection,
    ) -> Vec<i32> {
        let mut positions = vec![0; sizes.len()];
        self.arrange_into(density, total_size, sizes, layout_direction, &mut positions);
        positions
    }

    /// Like [`arrange`](Self::arrange) but writes into a caller-owned buffer of the same length.
    pub fn arrange_into(
        &self,
        density: Density,
        total_size: i32,
        sizes: &[i32],
        layout_direction: LayoutDirection,
        out_positions: &mut [i32],
    ) {
        assert_eq!(
            sizes.len(),
            out_positions.len(),
            "arrangement output must match the number of children"
        );
        if sizes.is_empty() {
            return;
        }

        if self.reverses_in(layout_direction) {
            let reversed: SmallVec<[i32; 8]> = sizes.iter().rev().copied().collect();
            self.mirrored().arrange_in_order(
                density,
                total_size,
                &reversed,
                LayoutDirection::Ltr,
                out_positions,
            );
            out_positions.reverse();
        } else {
            self.arrange_in_order(density, total_size, sizes, layout_direction, out_positions);
        }
    }

    // Offsets follow child order; only a group alignment reads `alignment_direction`.
    fn arrange_in_order(
        &self,
        density: Density,
        total_size: i32,
        sizes: &[i32],
        alignment_direction: LayoutDirection,
        out_positions: &mut [i32],
    ) {
        let consumed = total_children_size(sizes);
        let remaining = total_size.saturating_sub(consumed);
        let count = sizes.len() as f32;

        match *self {
            Arrangement::Start => place_packed(0, sizes, out_positions),
            Arrangement::End => place_packed(remaining, sizes, out_positions),
            Arrangement::Center => {
                place_with_gap(remaining as f32 / 2.0, 0.0, sizes, out_positions);
            }
            Arrangement::SpaceBetween => {
                let gap = if sizes.len() > 1 {
                    remaining as f32 / (count - 1.0)
                } else {
                    0.0
                };
                place_with_gap(0.0, gap, sizes, out_positions);
            }
            Arrangement::SpaceAround => {
                let gap = remaining as f32 / count;
                place_with_gap(gap / 2.0, gap, sizes, out_positions);
            }
            Arrangement::SpaceEvenly => {
                let gap = remaining as f32 / (count + 1.0);
                place_with_gap(gap, gap, sizes, out_positions);
            }
            Arrangement::FixedSpacing {
                space, alignment, ..
            } => {
                let space = density.round_to_px(space).max(0);
                place_spaced(
                    total_size,
                    space,
                    alignment,
                    alignment_direction,
                    sizes,
                    out_positions,
                );
            }
        }
    }
}

fn total_children_size(sizes: &[i32]) -> i32 {
    sizes.iter().fold(0, |acc, size| acc.saturating_add(*size))
}

fn place_packed(start: i32, sizes: &[i32], out_positions: &mut [i32]) {
    let mut cursor = start;
    for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
        *position = cursor;
        cursor = cursor.saturating_add(*size);
    }
}

// Rounds every offset on its own so float error does not accumulate.
fn place_with_gap(start: f32, gap: f32, sizes: &[i32], out_positions: &mut [i32]) {
    let mut current = start;
    for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
        *position = current.round() as i32;
        current += *size as f32 + gap;
    }
}

fn place_spaced(
    total_size: i32,
    space: i32,
    alignment: Option<GroupAlignment>,
    alignment_direction: LayoutDirection,
    sizes: &[i32],
    out_positions: &mut [i32],
) {
    let mut occupied = 0;
    let mut last_space = 0;
    for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
        *position = occupied.min(total_size - size);
        last_space = space.min(total_size - *position - size);
        occupied = *position + size + last_space;
    }
    occupied -= last_space;

    if let Some(alignment) = alignment {
        if occupied < total_size {
            let group_position = alignment.align(total_size - occupied, alignment_direction);
            for position in out_positions.iter_mut() {
                *position += group_position;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
