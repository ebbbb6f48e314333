use super::*;

const LTR: LayoutDirection = LayoutDirection::Ltr;
const RTL: LayoutDirection = LayoutDirection::Rtl;

fn arrange(arrangement: Arrangement, total: i32, sizes: &[i32]) -> Vec<i32> {
    arrangement.arrange(Density::default(), total, sizes, LTR)
}

fn arrange_rtl(arrangement: Arrangement, total: i32, sizes: &[i32]) -> Vec<i32> {
    arrangement.arrange(Density::default(), total, sizes, RTL)
}

#[test]
fn start_packs_from_leading_edge() {
    assert_eq!(arrange(Arrangement::Start, 100, &[20, 30]), vec![0, 20]);
}

#[test]
fn end_packs_against_trailing_edge() {
    assert_eq!(arrange(Arrangement::End, 100, &[20, 30]), vec![50, 80]);
}

#[test]
fn space_between_splits_leftover_between_children() {
    assert_eq!(
        arrange(Arrangement::SpaceBetween, 100, &[10, 10, 10]),
        vec![0, 45, 90]
    );
}

#[test]
fn space_between_with_single_child_starts_at_zero() {
    assert_eq!(arrange(Arrangement::SpaceBetween, 100, &[10]), vec![0]);
}

#[test]
fn space_evenly_distributes_gaps() {
    assert_eq!(
        arrange(Arrangement::SpaceEvenly, 100, &[10, 10, 10]),
        vec![18, 45, 73]
    );
}

#[test]
fn space_around_uses_half_gaps_at_edges() {
    assert_eq!(
        arrange(Arrangement::SpaceAround, 100, &[10, 10]),
        vec![20, 70]
    );
}

#[test]
fn half_pixel_offsets_round_away_from_zero() {
    // (11 - 4) / 2 = 3.5
    assert_eq!(arrange(Arrangement::Center, 11, &[4]), vec![4]);
    // 1.5, then 1.5 + 3 = 4.5
    assert_eq!(arrange(Arrangement::Center, 10, &[3, 4]), vec![2, 5]);
    // gap = 7 / 2 = 3.5
    assert_eq!(arrange(Arrangement::SpaceEvenly, 11, &[4]), vec![4]);
    // gap = 5, first child at 2.5
    assert_eq!(arrange(Arrangement::SpaceAround, 10, &[5]), vec![3]);
    // gap = 1.5: 0, 3.5, 8
    assert_eq!(
        arrange(Arrangement::SpaceBetween, 10, &[2, 3, 2]),
        vec![0, 4, 8]
    );
}

#[test]
fn spaced_by_uses_fixed_spacing() {
    assert_eq!(
        arrange(Arrangement::spaced_by(Dp(10.0)), 100, &[20, 20]),
        vec![0, 30]
    );
}

#[test]
fn spaced_by_converts_spacing_with_density() {
    let positions = Arrangement::spaced_by(Dp(5.0)).arrange(Density::new(2.0), 100, &[20, 20], LTR);
    assert_eq!(positions, vec![0, 30]);
}

#[test]
fn spaced_by_shrinks_spacing_instead_of_overflowing() {
    assert_eq!(
        arrange(Arrangement::spaced_by(Dp(10.0)), 50, &[20, 20, 20]),
        vec![0, 30, 30]
    );
}

#[test]
fn spaced_aligned_moves_the_group_as_one_block() {
    let centered = Arrangement::spaced_aligned(Dp(10.0), HorizontalAlignment::CenterHorizontally);
    assert_eq!(arrange(centered, 100, &[20, 20]), vec![25, 55]);

    let bottom = Arrangement::spaced_aligned(Dp(10.0), VerticalAlignment::Bottom);
    assert_eq!(arrange(bottom, 100, &[20, 20]), vec![50, 80]);
}

#[test]
fn rtl_start_and_end_swap_sides() {
    assert_eq!(arrange_rtl(Arrangement::Start, 100, &[20, 30]), vec![80, 50]);
    assert_eq!(arrange_rtl(Arrangement::End, 100, &[20, 30]), vec![30, 0]);
}

#[test]
fn rtl_spaced_by_reverses_order() {
    assert_eq!(
        arrange_rtl(Arrangement::spaced_by(Dp(10.0)), 100, &[20, 30]),
        vec![40, 0]
    );
    let start_aligned = Arrangement::spaced_aligned(Dp(10.0), HorizontalAlignment::Start);
    assert_eq!(arrange_rtl(start_aligned, 100, &[20, 30]), vec![80, 40]);
}

#[test]
fn absolute_spacing_ignores_direction() {
    let arrangement = Arrangement::absolute_spaced_by(Dp(10.0));
    assert_eq!(
        arrange_rtl(arrangement, 100, &[20, 30]),
        arrange(arrangement, 100, &[20, 30])
    );
}

#[test]
fn absolute_spacing_aligns_its_group_in_the_layout_direction() {
    let arrangement = Arrangement::FixedSpacing {
        space: Dp(10.0),
        rtl_mirror: false,
        alignment: Some(HorizontalAlignment::Start.into()),
    };
    assert_eq!(arrange(arrangement, 100, &[20, 20]), vec![0, 30]);
    // Order is kept, but start is the right edge.
    assert_eq!(arrange_rtl(arrangement, 100, &[20, 20]), vec![50, 80]);
}

#[test]
fn empty_input_yields_empty_output() {
    let all = [
        Arrangement::Start,
        Arrangement::End,
        Arrangement::Center,
        Arrangement::SpaceBetween,
        Arrangement::SpaceAround,
        Arrangement::SpaceEvenly,
        Arrangement::spaced_by(Dp(4.0)),
    ];
    for arrangement in all {
        assert!(arrange(arrangement, 100, &[]).is_empty(), "{arrangement:?}");
        assert!(arrange_rtl(arrangement, 100, &[]).is_empty(), "{arrangement:?}");
    }
}

#[test]
fn spacing_is_reported_only_for_fixed_spacing() {
    assert_eq!(Arrangement::Center.spacing(), Dp::ZERO);
    assert_eq!(Arrangement::spaced_by(Dp(6.0)).spacing(), Dp(6.0));
}

#[test]
#[should_panic(expected = "must match the number of children")]
fn arrange_into_rejects_mismatched_buffers() {
    let mut out = [0; 1];
    Arrangement::Start.arrange_into(Density::default(), 10, &[1, 2], LTR, &mut out);
}
