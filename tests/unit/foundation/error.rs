use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        SceneError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        SceneError::numeric("x")
            .to_string()
            .contains("numeric error:")
    );
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn layout_errors_keep_their_message() {
    let err = SceneError::from(LayoutError::UnknownLayout("grid".to_string()));
    let msg = err.to_string();
    assert!(msg.contains("layout error:"));
    assert!(msg.contains("grid"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
