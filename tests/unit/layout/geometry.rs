use super::*;

const EPS: f64 = 1e-12;

#[test]
fn wide_element_is_width_bound() {
    let s = scale_to_fit(4.0, Size::new(10.0, 5.0));
    assert_eq!(s.width, 10.0);
    assert_eq!(s.height, 2.5);
}

#[test]
fn tall_element_is_height_bound() {
    let s = scale_to_fit(0.5, Size::new(10.0, 5.0));
    assert_eq!(s.height, 5.0);
    assert_eq!(s.width, 2.5);
}

#[test]
fn equal_aspect_takes_height_branch_and_fills_box() {
    let s = scale_to_fit(2.0, Size::new(10.0, 5.0));
    assert_eq!(s, Size::new(10.0, 5.0));
}

#[test]
fn scaling_preserves_aspect_ratio() {
    for aspect in [0.1, 0.75, 1.0, 16.0 / 9.0, 3.0, 42.0] {
        for bounds in [Size::new(13.0, 5.1), Size::new(1.0, 7.0), Size::new(0.3, 0.2)] {
            let s = scale_to_fit(aspect, bounds);
            assert!((s.width / s.height - aspect).abs() < 1e-9 * aspect.max(1.0));
            assert!(s.width <= bounds.width + EPS);
            assert!(s.height <= bounds.height + EPS);
        }
    }
}

#[test]
fn clamp_leaves_fitting_element_alone() {
    assert_eq!(clamp_bottom(1.0, 2.0, 7.5), 1.0);
    assert_eq!(clamp_bottom(5.5, 2.0, 7.5), 5.5);
}

#[test]
fn clamp_shifts_overflowing_element_up_to_bottom_edge() {
    let top = clamp_bottom(6.0, 2.0, 7.5);
    assert_eq!(top, 5.5);
    assert_eq!(top + 2.0, 7.5);
}

#[test]
fn clamp_never_resizes_oversized_element() {
    let top = clamp_bottom(0.0, 9.0, 7.5);
    assert_eq!(top, -1.5);
}
