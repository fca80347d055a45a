use super::*;

#[test]
fn presets_match_their_directory_names() {
    for q in Quality::ALL {
        let c = q.canvas();
        let expected = format!("{}p{}", c.height, q.fps().num);
        assert_eq!(q.dir_name(), expected);
    }
    assert_eq!(Quality::Low.canvas().width, 854);
    assert_eq!(Quality::FourK.canvas().width, 3840);
}

#[test]
fn quality_parses_flags() {
    assert_eq!("l".parse::<Quality>().unwrap(), Quality::Low);
    assert_eq!("M".parse::<Quality>().unwrap(), Quality::Medium);
    assert_eq!("h".parse::<Quality>().unwrap(), Quality::High);
    assert_eq!("k".parse::<Quality>().unwrap(), Quality::FourK);
    assert!(matches!(
        "x".parse::<Quality>(),
        Err(ExplainerError::Validation(_))
    ));
}

#[test]
fn output_path_follows_media_layout() {
    let cfg = RenderConfig {
        quality: Quality::Low,
        ..RenderConfig::default()
    };
    let path = cfg.output_path("neural_network", "NeuralNetworkScene").unwrap();
    assert_eq!(
        path,
        PathBuf::from("media/videos/neural_network/480p15/NeuralNetworkScene.mp4")
    );
    assert!(cfg.output_path("a/b", "Scene").is_err());
    assert!(cfg.output_path("script", "").is_err());
}

#[test]
fn defaults() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.quality, Quality::High);
    assert!(cfg.overwrite);
    assert!(!cfg.preview);
    assert!(!cfg.threading().parallel);
}
