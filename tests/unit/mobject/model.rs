use super::*;
use crate::graph::layout::{LayoutKind, LayoutOpts};
use crate::graph::model::Graph;

fn line() -> Mobject {
    Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)).into()
}

#[test]
fn move_to_recenters() {
    let mut m = line();
    m.move_to(Point::new(2.0, 3.0));
    assert_eq!(m.center(), Point::new(2.0, 3.0));
    assert_eq!(m.as_line().unwrap().start, Point::new(1.0, 3.0));
}

#[test]
fn set_color_touches_fill_only_when_present() {
    let mut l = line();
    l.set_color(Color::RED);
    assert_eq!(l.style().stroke, Color::RED);
    assert_eq!(l.style().fill, None);

    let mut d: Mobject = Dot::new(Point::ORIGIN).into();
    d.set_color(Color::RED);
    assert_eq!(d.style().fill, Some(Color::RED));
}

#[test]
fn interpolation_hits_both_endpoints() {
    let a = line();
    let mut b = line();
    b.shift(Vec2::new(0.0, 2.0));
    b.set_color(Color::BLUE);
    assert_eq!(a.interpolate(&b, 0.0).unwrap(), a);
    assert_eq!(a.interpolate(&b, 1.0).unwrap(), b);
    let mid = a.interpolate(&b, 0.5).unwrap();
    assert_eq!(mid.center(), Point::new(0.0, 1.0));
}

#[test]
fn kind_mismatch_is_an_animation_error() {
    let a = line();
    let b: Mobject = Dot::new(Point::ORIGIN).into();
    let err = a.interpolate(&b, 0.5).unwrap_err();
    assert!(matches!(err, SceneError::Animation(_)));
    assert!(err.to_string().contains("line"));
}

#[test]
fn graphs_with_different_vertex_sets_do_not_transform() {
    let opts = LayoutOpts::default();
    let a = GraphMobject::with_layout(Graph::complete(3), LayoutKind::Circular, &opts).unwrap();
    let b = GraphMobject::with_layout(Graph::complete(4), LayoutKind::Circular, &opts).unwrap();
    let err = Mobject::from(a).interpolate(&Mobject::from(b), 0.5).unwrap_err();
    assert!(matches!(err, SceneError::Animation(_)));
}

#[test]
fn style_lerp_blends_reveal_and_opacity() {
    let a = Style {
        reveal: 0.0,
        opacity: 0.0,
        ..Style::default()
    };
    let s = Style::lerp(&a, &Style::default(), 0.25);
    assert_eq!(s.reveal, 0.25);
    assert_eq!(s.opacity, 0.25);
}

#[test]
fn accessors_match_only_their_own_kind() {
    let l = line();
    let base = l.as_line().unwrap().clone();
    let moving = base.rotated(std::f64::consts::FRAC_PI_2, base.start);
    let angle: Mobject = Angle::between(&base, &moving, 0.5, false).unwrap().into();
    let matrix: Mobject = MatrixLabel::column(&[1.0, 2.0], 0, Point::ORIGIN).into();

    assert!(angle.as_angle().is_some());
    assert!(angle.as_line().is_none() && angle.as_matrix().is_none());
    assert_eq!(matrix.as_matrix().map(MatrixLabel::rows), Some(2));
    assert!(matrix.as_label().is_none() && matrix.as_angle().is_none());
    assert!(l.as_arrow().is_none() && l.as_graph().is_none());
}
