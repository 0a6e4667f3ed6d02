use super::*;

#[test]
fn lerp_is_unclamped() {
    assert_eq!(lerp(0.0, [100.0, 0.0]), 100.0);
    assert_eq!(lerp(1.0, [100.0, 0.0]), 0.0);
    assert_eq!(lerp(0.5, [0.0, 10.0]), 5.0);
    assert!((lerp(1.1, [0.0, 1.0]) - 1.1).abs() < 1e-12);
}

#[test]
fn clamp_progress_window() {
    assert_eq!(clamp_progress(-3, 40), 0.0);
    assert_eq!(clamp_progress(0, 40), 0.0);
    assert_eq!(clamp_progress(20, 40), 0.5);
    assert_eq!(clamp_progress(40, 40), 1.0);
    assert_eq!(clamp_progress(90, 40), 1.0);
    assert_eq!(clamp_progress(0, 0), 1.0);
}

#[test]
fn interpolate_clamps_and_extends() {
    let input = [0.0, 10.0];
    let output = [0.0, 1.0];
    assert_eq!(interpolate(-5.0, &input, &output, Extrapolate::Clamp), 0.0);
    assert_eq!(interpolate(15.0, &input, &output, Extrapolate::Clamp), 1.0);
    assert_eq!(interpolate(15.0, &input, &output, Extrapolate::Extend), 1.5);
    assert_eq!(interpolate(5.0, &input, &output, Extrapolate::Clamp), 0.5);
}

#[test]
fn interpolate_multi_segment_and_bad_breakpoints() {
    let v = interpolate(
        15.0,
        &[0.0, 10.0, 20.0],
        &[0.0, 1.0, 0.0],
        Extrapolate::Clamp,
    );
    assert_eq!(v, 0.5);
    assert_eq!(
        interpolate(1.0, &[0.0, 0.0], &[3.0, 4.0], Extrapolate::Clamp),
        3.0
    );
    assert_eq!(interpolate(1.0, &[], &[], Extrapolate::Clamp), 0.0);
}

#[test]
fn fade_window_is_trapezoid() {
    assert_eq!(fade_window(0, 100, 10), 0.0);
    assert_eq!(fade_window(5, 100, 10), 0.5);
    assert_eq!(fade_window(10, 100, 10), 1.0);
    assert_eq!(fade_window(50, 100, 10), 1.0);
    assert_eq!(fade_window(90, 100, 10), 1.0);
    assert_eq!(fade_window(95, 100, 10), 0.5);
    assert_eq!(fade_window(100, 100, 10), 0.0);
    assert_eq!(fade_window(-1, 100, 10), 0.0);
}

#[test]
fn fade_window_short_scene_shrinks_ramps() {
    assert_eq!(fade_window(0, 12, 10), 0.0);
    assert_eq!(fade_window(6, 12, 10), 1.0);
    assert_eq!(fade_window(12, 12, 10), 0.0);
    assert_eq!(fade_window(3, 0, 10), 0.0);
}

#[test]
fn lerp_point_midpoint() {
    let p = lerp_point(Point::new(50.0, 15.0), Point::new(50.0, 50.0), 0.5);
    assert_eq!(p, Point::new(50.0, 32.5));
}
