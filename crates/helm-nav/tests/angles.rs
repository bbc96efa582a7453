use std::f32::consts::PI;

use helm_nav::{angle_difference, bearing, wrap_angle, Vec2};

#[test]
fn wrap_angle_lands_in_the_half_open_range() {
    let samples = [-7.0, -PI, -3.0, -0.5, 0.0, 0.5, 3.0, PI, 7.0, 4.0 * PI];
    for a in samples {
        let w = wrap_angle(a);
        assert!(w > -PI && w <= PI, "wrap_angle({a}) = {w} out of range");
    }
}

#[test]
fn wrap_angle_is_exact_at_the_boundary() {
    assert_eq!(wrap_angle(PI), PI);
    assert_eq!(wrap_angle(-PI), PI);
}

#[test]
fn angle_difference_is_the_shortest_signed_distance() {
    let cases = [
        (0.0, PI / 2.0),
        (3.0, -3.0),
        (-PI, PI),
        (0.1, 2.0 * PI + 0.2),
        (2.5, -2.5),
    ];
    for (a, b) in cases {
        let d = angle_difference(a, b);
        assert!(d > -PI && d <= PI, "difference {d} out of range");
        // a + d must equal b modulo a full turn.
        let err = wrap_angle(a + d - b);
        assert!(err.abs() < 1e-5, "a={a} b={b} d={d} err={err}");
    }
}

#[test]
fn angle_difference_picks_the_short_way_around() {
    // From 3.0 to -3.0 the short way crosses PI, a positive left turn.
    let d = angle_difference(3.0, -3.0);
    assert!(d > 0.0);
    assert!(d < 0.5);
}

#[test]
fn bearing_matches_the_compass_convention() {
    let origin = Vec2::ZERO;
    assert!(bearing(origin, Vec2::new(0.0, 1.0)).abs() < 1e-6); // north
    assert!((bearing(origin, Vec2::new(1.0, 0.0)) - PI / 2.0).abs() < 1e-6); // east
    assert!((bearing(origin, Vec2::new(0.0, -1.0)) - PI).abs() < 1e-6); // south
    assert!((bearing(origin, Vec2::new(-1.0, 0.0)) + PI / 2.0).abs() < 1e-6); // west
}

#[test]
fn bearing_is_translation_invariant() {
    let offset = Vec2::new(13.0, -4.5);
    let from = Vec2::new(1.0, 2.0);
    let to = Vec2::new(-3.0, 5.0);
    let a = bearing(from, to);
    let b = bearing(from + offset, to + offset);
    assert!((a - b).abs() < 1e-6);
}
