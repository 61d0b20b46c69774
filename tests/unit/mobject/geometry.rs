use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::foundation::math::degrees;

fn approx(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

fn base() -> Line {
    Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0))
}

#[test]
fn rotating_by_zero_keeps_coordinates() {
    let v = Arrow::vector(Vec2::new(2.0, 2.0));
    assert_eq!(v.rotated_about_origin(0.0).coordinates(), Vec2::new(2.0, 2.0));
    assert_eq!(base().rotated(0.0, Point::ORIGIN), base());
}

#[test]
fn rotating_a_vector_quarter_turn() {
    let v = Arrow::vector(Vec2::new(1.0, 0.0)).rotated_about_origin(FRAC_PI_2);
    assert!(approx(v.end, Point::new(0.0, 1.0)));
    assert_eq!(v.start, Point::ORIGIN);
}

#[test]
fn line_rotation_about_an_endpoint_keeps_it_fixed() {
    let l = base().rotated(degrees(110.0), Point::new(-1.0, 0.0));
    assert_eq!(l.start, Point::new(-1.0, 0.0));
    assert!((l.length() - 2.0).abs() < 1e-9);
}

#[test]
fn angle_between_lines_sharing_a_start() {
    let moving = base().rotated(degrees(40.0), Point::new(-1.0, 0.0));
    let a = Angle::between(&base(), &moving, 0.5, false).unwrap();
    assert!(approx(a.vertex, Point::new(-1.0, 0.0)));
    assert!(a.start_angle.abs() < 1e-9);
    assert!((a.sweep - degrees(40.0)).abs() < 1e-9);

    let mid = a.point_from_proportion(0.5);
    let expected = Point::new(-1.0, 0.0) + 0.5 * Vec2::new(degrees(20.0).cos(), degrees(20.0).sin());
    assert!(approx(mid, expected));
}

#[test]
fn reflex_angle_sweeps_clockwise() {
    let moving = base().rotated(degrees(90.0), Point::new(-1.0, 0.0));
    let a = Angle::between(&base(), &moving, 1.0, true).unwrap();
    assert!((a.sweep + 1.5 * PI).abs() < 1e-9);
}

#[test]
fn angles_beyond_a_half_turn_stay_counterclockwise() {
    let moving = base().rotated(degrees(350.0), Point::new(-1.0, 0.0));
    let a = Angle::between(&base(), &moving, 0.5, false).unwrap();
    assert!((a.sweep - degrees(350.0)).abs() < 1e-9);
}

#[test]
fn parallel_lines_have_no_angle() {
    let shifted = Line::new(Point::new(-1.0, 1.0), Point::new(1.0, 1.0));
    assert!(matches!(
        Angle::between(&base(), &shifted, 0.5, false),
        Err(SceneError::Evaluation(_))
    ));
}

#[test]
fn arrow_tip_shrinks_on_short_arrows() {
    let long = Arrow::vector(Vec2::new(3.0, 0.0));
    assert_eq!(long.effective_tip_length(), Arrow::DEFAULT_TIP_LENGTH);
    let short = Arrow::vector(Vec2::new(0.2, 0.0));
    assert!((short.effective_tip_length() - 0.1).abs() < 1e-12);
}

#[test]
fn straight_angle_between_lines_sharing_a_start() {
    let moving = base().rotated(degrees(180.0), Point::new(-1.0, 0.0));
    let a = Angle::between(&base(), &moving, 0.5, false).unwrap();
    assert_eq!(a.vertex, Point::new(-1.0, 0.0));
    assert!((a.sweep - PI).abs() < 1e-9);
}

#[test]
fn interpolation_moves_endpoints_linearly() {
    let target = base().rotated(degrees(90.0), Point::new(-1.0, 0.0));
    let mid = Line::lerp(&base(), &target, 0.5);
    assert_eq!(mid.start, Point::new(-1.0, 0.0));
    assert!(approx(mid.end, Point::new(0.0, 1.0)));

    let a = Arrow::vector(Vec2::new(2.0, 0.0));
    let b = Arrow::vector(Vec2::new(0.0, 4.0));
    let quarter = Arrow::lerp(&a, &b, 0.25);
    assert_eq!(quarter.start, Point::ORIGIN);
    assert!(approx(quarter.end, Point::new(1.5, 1.0)));

    let d = Dot::lerp(&Dot::new(Point::ORIGIN), &Dot::new(Point::new(2.0, -2.0)), 0.5);
    assert!(approx(d.center, Point::new(1.0, -1.0)));
}

#[test]
fn angle_interpolation_moves_vertex_and_sweep() {
    let moving = base().rotated(degrees(40.0), Point::new(-1.0, 0.0));
    let a = Angle::between(&base(), &moving, 0.5, false).unwrap();
    let mut b = a.clone();
    b.vertex = Point::new(1.0, 0.0);
    b.sweep = degrees(80.0);
    let mid = Angle::lerp(&a, &b, 0.5);
    assert!(approx(mid.vertex, Point::ORIGIN));
    assert!((mid.sweep - degrees(60.0)).abs() < 1e-9);
}
