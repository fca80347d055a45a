use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ExplainerError::invalid_layout("x")
            .to_string()
            .contains("invalid layout:")
    );
    assert!(
        ExplainerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ExplainerError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ExplainerError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ExplainerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_scene_lists_alternatives() {
    let err = ExplainerError::UnknownScene {
        name: "Nope".to_string(),
        available: "A, B".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("'Nope'"));
    assert!(msg.contains("A, B"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ExplainerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
