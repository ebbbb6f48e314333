use super::*;

#[test]
fn round_to_px_rounds_half_away_from_zero() {
    let density = Density::new(1.5);
    assert_eq!(density.round_to_px(Dp(3.0)), 5);
    assert_eq!(density.round_to_px(Dp(1.0)), 2);
    assert_eq!(density.round_to_px(Dp(-1.0)), -2);
}

#[test]
fn infinite_dp_maps_to_sentinel() {
    let density = Density::new(2.0);
    assert_eq!(density.round_to_px(Dp::INFINITY), INFINITE_PX);
}

#[test]
fn font_scale_does_not_affect_dp() {
    let density = Density::with_font_scale(2.0, 1.3);
    assert_eq!(density.round_to_px(Dp(10.0)), 20);
    assert_eq!(density.to_dp(20), Dp(10.0));
}
