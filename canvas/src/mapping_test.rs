#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    let a = Point::new(100.0, 100.0);
    let b = Point::new(150.0, 100.0);
    assert!(approx_eq(a.distance_to(b), 50.0));
}

#[test]
fn point_distance_diagonal() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance_to(b), 5.0));
}

// --- Defaults ---

#[test]
fn default_mapping_uses_default_surface() {
    let mapping = SurfaceMapping::default();
    assert_eq!(mapping.surface_w, 400.0);
    assert_eq!(mapping.surface_h, 600.0);
    assert_eq!(mapping.display_w, 0.0);
    assert_eq!(mapping.display_h, 0.0);
}

#[test]
fn unset_display_maps_one_to_one() {
    let mapping = SurfaceMapping::default();
    let p = mapping.to_surface(Point::new(37.0, 91.0));
    assert!(point_approx_eq(p, Point::new(37.0, 91.0)));
}

// --- to_surface ---

#[test]
fn to_surface_identity_when_sizes_match() {
    let mut mapping = SurfaceMapping::default();
    mapping.set_display_size(400.0, 600.0);
    let p = mapping.to_surface(Point::new(100.0, 200.0));
    assert!(point_approx_eq(p, Point::new(100.0, 200.0)));
}

#[test]
fn to_surface_scales_down_enlarged_display() {
    let mut mapping = SurfaceMapping::default();
    mapping.set_display_size(800.0, 1200.0);
    let p = mapping.to_surface(Point::new(200.0, 300.0));
    assert!(point_approx_eq(p, Point::new(100.0, 150.0)));
}

#[test]
fn to_surface_scales_up_shrunken_display() {
    let mut mapping = SurfaceMapping::default();
    mapping.set_display_size(200.0, 300.0);
    let p = mapping.to_surface(Point::new(50.0, 75.0));
    assert!(point_approx_eq(p, Point::new(100.0, 150.0)));
}

#[test]
fn to_surface_handles_independent_axis_scales() {
    let mut mapping = SurfaceMapping::default();
    mapping.set_display_size(200.0, 600.0);
    let p = mapping.to_surface(Point::new(100.0, 300.0));
    assert!(point_approx_eq(p, Point::new(200.0, 300.0)));
}

/// The same relative click position yields the same surface point
/// regardless of the display scale factor.
#[test]
fn to_surface_is_scale_invariant() {
    let relative = (0.25, 0.4);
    let mut expected = None;
    for k in [0.5, 1.0, 2.0, 3.5] {
        let mut mapping = SurfaceMapping::default();
        mapping.set_display_size(400.0 * k, 600.0 * k);
        let click = Point::new(400.0 * k * relative.0, 600.0 * k * relative.1);
        let surface = mapping.to_surface(click);
        match expected {
            None => expected = Some(surface),
            Some(first) => assert!(point_approx_eq(surface, first), "scale {k} diverged"),
        }
    }
}

// --- to_display ---

#[test]
fn to_display_inverts_to_surface() {
    let mut mapping = SurfaceMapping::default();
    mapping.set_display_size(320.0, 480.0);
    let original = Point::new(123.0, 456.0);
    let round_trip = mapping.to_surface(mapping.to_display(original));
    assert!(point_approx_eq(round_trip, original));
}

#[test]
fn surface_resize_changes_scale() {
    let mut mapping = SurfaceMapping::default();
    mapping.set_display_size(400.0, 500.0);
    mapping.set_surface_size(400.0, 500.0);
    let p = mapping.to_surface(Point::new(10.0, 20.0));
    assert!(point_approx_eq(p, Point::new(10.0, 20.0)));
}
