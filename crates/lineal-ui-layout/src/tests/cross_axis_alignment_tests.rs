use super::*;
use crate::measurable::NodeId;

struct LinedPlaceable {
    height: i32,
    baseline: Option<i32>,
}

impl Placeable for LinedPlaceable {
    fn place(&self, _x: i32, _y: i32) {}

    fn width(&self) -> i32 {
        10
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn node_id(&self) -> NodeId {
        0
    }

    fn alignment_line(&self, line: AlignmentLine) -> Option<i32> {
        if line == AlignmentLine::FIRST_BASELINE {
            self.baseline
        } else {
            None
        }
    }
}

fn child(baseline: Option<i32>) -> LinedPlaceable {
    LinedPlaceable {
        height: 20,
        baseline,
    }
}

const LTR: LayoutDirection = LayoutDirection::Ltr;
const RTL: LayoutDirection = LayoutDirection::Rtl;

#[test]
fn start_and_end_swap_in_rtl() {
    let placeable = child(None);
    assert_eq!(CrossAxisAlignment::Start.align(30, LTR, &placeable, 0), 0);
    assert_eq!(CrossAxisAlignment::Start.align(30, RTL, &placeable, 0), 30);
    assert_eq!(CrossAxisAlignment::End.align(30, LTR, &placeable, 0), 30);
    assert_eq!(CrossAxisAlignment::End.align(30, RTL, &placeable, 0), 0);
}

#[test]
fn center_uses_integer_division() {
    let placeable = child(None);
    assert_eq!(CrossAxisAlignment::Center.align(7, LTR, &placeable, 0), 3);
    assert_eq!(CrossAxisAlignment::Center.align(7, RTL, &placeable, 0), 3);
}

#[test]
fn perpendicular_alignments_delegate() {
    let placeable = child(None);
    let bottom = CrossAxisAlignment::from(VerticalAlignment::Bottom);
    assert_eq!(bottom.align(12, RTL, &placeable, 0), 12);

    let end = CrossAxisAlignment::from(HorizontalAlignment::End);
    assert_eq!(end.align(12, LTR, &placeable, 0), 12);
    assert_eq!(end.align(12, RTL, &placeable, 0), 0);
}

#[test]
fn alignment_line_offsets_by_shared_line() {
    let alignment = CrossAxisAlignment::from(AlignmentLine::FIRST_BASELINE);
    let placeable = child(Some(6));
    assert_eq!(alignment.align(10, LTR, &placeable, 15), 9);
    assert_eq!(alignment.align(10, RTL, &placeable, 15), 1);
}

#[test]
fn unspecified_line_places_at_zero() {
    let alignment = CrossAxisAlignment::from(AlignmentLine::FIRST_BASELINE);
    let placeable = child(None);
    assert_eq!(alignment.align(10, LTR, &placeable, 15), 0);
    assert_eq!(alignment.align(10, RTL, &placeable, 15), 0);
}

#[test]
fn computed_provider_reads_the_placeable() {
    let provider = AlignmentLineProvider::computed(|placeable| Some(placeable.height() / 2));
    let alignment = CrossAxisAlignment::AlignmentLine(provider);
    let placeable = child(None);

    assert!(alignment.is_relative());
    assert_eq!(alignment.calculate_alignment_line_position(&placeable), Some(10));
    assert_eq!(alignment.align(0, LTR, &placeable, 14), 4);
}

#[test]
fn computed_providers_compare_by_identity() {
    let provider = AlignmentLineProvider::computed(|_| None);
    assert_eq!(provider.clone(), provider);
    assert_ne!(provider, AlignmentLineProvider::computed(|_| None));
    assert_eq!(format!("{provider:?}"), "Computed(..)");
}
