use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_rounds_durations_to_nearest_frame() {
    let fps = Fps::new(15, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(1.0), 15);
    assert_eq!(fps.secs_to_frames_round(0.5), 8);
    assert_eq!(fps.secs_to_frames_round(0.0), 0);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);
}

#[test]
fn fps_frames_secs_roundtrip() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_round(secs), 123);
}

#[test]
fn canvas_limits_are_enforced() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(1920, 1080).unwrap();
    assert!((c.aspect() - 16.0 / 9.0).abs() < 1e-12);
}
