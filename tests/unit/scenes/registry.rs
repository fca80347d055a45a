use super::*;

#[test]
fn script_parses_bare_and_file_names() {
    assert_eq!("neural_network".parse::<Script>().unwrap(), Script::NeuralNetwork);
    assert_eq!("neural_network.py".parse::<Script>().unwrap(), Script::NeuralNetwork);
    assert_eq!(
        "scripts/autonomous_agent.py".parse::<Script>().unwrap(),
        Script::AutonomousAgent
    );
    assert!(matches!(
        "cooking".parse::<Script>(),
        Err(ExplainerError::UnknownScene { .. })
    ));
}

#[test]
fn each_script_lists_its_scenes() {
    assert_eq!(Script::AutonomousAgent.scenes().len(), 5);
    assert_eq!(
        Script::NeuralNetwork.scene_names(),
        vec!["NeuralNetworkScene", "HelloScene", "GradientDescentVisualization"]
    );
}

#[test]
fn hello_alias_resolves() {
    let scene = build_scene(Script::NeuralNetwork, "HelloManimTest").unwrap();
    assert_eq!(scene.name, "HelloScene");
}

#[test]
fn unknown_scene_lists_alternatives() {
    let err = build_scene(Script::AutonomousAgent, "NeuralNetworkScene").unwrap_err();
    match err {
        ExplainerError::UnknownScene { name, available } => {
            assert_eq!(name, "NeuralNetworkScene");
            assert!(available.contains("CompoundLoopScene"));
            assert!(available.contains("FullExplainerScene"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn built_scene_names_match_entries() {
    for script in Script::ALL {
        for entry in script.scenes() {
            let scene = build_scene(script, entry.name).unwrap();
            assert_eq!(scene.name, entry.name);
            assert!(scene.duration() > 0.0);
        }
    }
}
