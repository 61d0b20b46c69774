use super::*;

#[test]
fn presets_drive_canvas_and_fps() {
    let cfg = RenderConfig::with_quality(Quality::Medium);
    assert_eq!(cfg.canvas().unwrap(), Canvas::new(1280, 720).unwrap());
    assert_eq!(cfg.fps().unwrap(), Fps::new(30, 1).unwrap());
}

#[test]
fn explicit_fields_override_the_preset() {
    let cfg: RenderConfig = serde_json::from_str(
        r##"{ "quality": "high", "fps": 24, "width": 640, "background": "#102030", "layout_seed": 7 }"##,
    )
    .unwrap();
    assert_eq!(cfg.canvas().unwrap(), Canvas::new(640, 1080).unwrap());
    assert_eq!(cfg.fps().unwrap().num, 24);
    assert_eq!(cfg.background, Color::rgb(0x10, 0x20, 0x30));
    assert_eq!(cfg.layout_opts().seed, 7);
    assert!(!cfg.is_headless());
}

#[test]
fn four_k_quality_uses_its_tag() {
    let cfg: RenderConfig = serde_json::from_str(r#"{ "quality": "4k" }"#).unwrap();
    assert_eq!(cfg.quality, Quality::FourK);
    assert_eq!(cfg.quality.tag(), "2160p60");
}

#[test]
fn unknown_fields_and_zero_fps_are_rejected() {
    assert!(serde_json::from_str::<RenderConfig>(r#"{ "colour": "red" }"#).is_err());
    let cfg = RenderConfig {
        fps: Some(0),
        ..RenderConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(SceneError::Validation(_))));
}

#[test]
fn missing_config_file_is_reported_with_its_path() {
    let err = RenderConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.json"));
}
