use std::collections::HashSet;

use super::*;
use crate::config::RenderConfig;
use crate::encode::sink::NullSink;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::{degrees, homogeneous_det};
use crate::runtime::animation::Animation;
use crate::runtime::scene::{Scene, run_scene};

fn tiny() -> RenderConfig {
    RenderConfig {
        fps: Some(4),
        width: Some(64),
        height: Some(36),
        ..RenderConfig::default()
    }
    .headless()
}

#[test]
fn registry_names_are_unique_and_resolvable() {
    let names = scene_names();
    assert_eq!(names.len(), SCENES.len());
    assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    for name in &names {
        assert_eq!(find_scene(name).map(|s| s.name()), Some(*name));
    }
    assert!(find_scene("movingangle").is_none());
}

#[test]
fn graph_scenes_play_one_create_and_a_transform_per_layout() {
    let mut sink = NullSink::new();
    let stats = run_scene(&VGraphAllAnimations, &tiny(), &mut sink).unwrap();
    assert_eq!((stats.plays, stats.waits), (8, 8));

    let mut sink = NullSink::new();
    let stats = run_scene(&CompleteGraphAllAnimations, &tiny(), &mut sink).unwrap();
    assert_eq!((stats.plays, stats.waits), (7, 7));
}

#[test]
fn moving_angle_geometry_tracks_theta() {
    let mut sink = NullSink::new();
    let mut scene = Scene::new(&tiny(), &mut sink).unwrap();
    let ids = moving_angle::build(&mut scene).unwrap();
    moving_angle::attach_updaters(&mut scene, ids).unwrap();

    scene
        .play(vec![Animation::set_value(ids.theta, 40.0)])
        .unwrap();
    let arc = scene.get(ids.arc).unwrap().as_angle().unwrap().clone();
    assert!((arc.sweep - degrees(40.0)).abs() < 1e-9);
    assert!((arc.radius - moving_angle::ARC_RADIUS).abs() < 1e-12);

    let label = scene.get(ids.label).unwrap().as_label().unwrap();
    let expected = Point::new(-1.0, 0.0)
        + moving_angle::LABEL_RADIUS * Vec2::new(degrees(20.0).cos(), degrees(20.0).sin());
    assert!((label.center - expected).hypot() < 1e-9);
    assert_eq!(label.text, "θ");
}

#[test]
fn moving_angle_passes_through_a_straight_angle() {
    let mut sink = NullSink::new();
    let mut scene = Scene::new(&tiny(), &mut sink).unwrap();
    let ids = moving_angle::build(&mut scene).unwrap();
    moving_angle::attach_updaters(&mut scene, ids).unwrap();
    scene
        .play(vec![Animation::set_value(ids.theta, 180.0)])
        .unwrap();
    let arc = scene.get(ids.arc).unwrap().as_angle().unwrap();
    assert!((arc.sweep - std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn coordinate_labels_use_the_arrow_components() {
    let fixed = crate::mobject::geometry::Arrow::vector(Vec2::new(-3.0, -2.0));
    let label = vectors::coordinate_label(&fixed, 0);
    assert_eq!(label.entries, vec![vec!["-3".to_string()], vec!["-2".to_string()]]);

    // The label sits beyond the tip, along the arrow.
    let anchor = vectors::coordinate_label_anchor(&fixed);
    assert!((anchor - Point::ORIGIN).hypot() > (fixed.end - Point::ORIGIN).hypot());
}

#[test]
fn rotating_vector_label_follows_the_vector() {
    let mut sink = NullSink::new();
    let mut scene = Scene::new(&tiny(), &mut sink).unwrap();
    let ids = vectors::add_rotating_vector(&mut scene).unwrap();
    scene
        .play(vec![Animation::set_value(ids.theta, 90.0)])
        .unwrap();

    let v = scene.get(ids.vector).unwrap().as_arrow().unwrap().clone();
    assert!((v.end - Point::new(-2.0, 2.0)).hypot() < 1e-9);
    let label = scene.get(ids.label).unwrap().as_matrix().unwrap();
    assert_eq!(
        label.entries,
        vec![vec!["-2.0".to_string()], vec!["2.0".to_string()]]
    );
}

#[test]
fn determinant_text_has_two_decimals_and_no_negative_zero() {
    assert_eq!(determinant::determinant_text(4.0), "det = 4.00");
    assert_eq!(determinant::determinant_text(-1.234), "det = -1.23");
    assert_eq!(determinant::determinant_text(-1e-12), "det = 0.00");
}

#[test]
fn determinant_label_matches_the_vectors_after_a_play() {
    let mut sink = NullSink::new();
    let mut scene = Scene::new(&tiny(), &mut sink).unwrap();
    let ids = determinant::build(&mut scene, false, true).unwrap();
    scene
        .play(vec![Animation::set_value(ids.theta, 135.0)])
        .unwrap();

    let a = scene.get(ids.fixed).unwrap().as_arrow().unwrap().coordinates();
    let b = scene.get(ids.rotating).unwrap().as_arrow().unwrap().coordinates();
    let det = homogeneous_det(a, b).unwrap();
    let label = scene.get(ids.det_label).unwrap().as_label().unwrap();
    assert_eq!(label.text, determinant::determinant_text(det));

    let matrix = scene
        .get(ids.matrix.unwrap())
        .unwrap()
        .as_matrix()
        .unwrap();
    assert_eq!((matrix.rows(), matrix.cols()), (3, 3));
    assert_eq!(matrix.entries[1], vec!["3.0", "1.0", "0.0"]);
}
