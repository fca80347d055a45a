use std::str::FromStr;

use crate::{
    foundation::error::{ExplainerError, ExplainerResult},
    scene::model::Scene,
    scenes::{agent, neural},
};

/// A scene a script can render, with the names it answers to.
#[derive(Clone, Copy, Debug)]
pub struct SceneEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub build: fn() -> ExplainerResult<Scene>,
}

impl SceneEntry {
    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

const AGENT_SCENES: &[SceneEntry] = &[
    SceneEntry {
        name: "CompoundLoopScene",
        aliases: &[],
        build: agent::compound_loop,
    },
    SceneEntry {
        name: "TaskDecompositionScene",
        aliases: &[],
        build: agent::task_decomposition,
    },
    SceneEntry {
        name: "KnowledgeCompoundingScene",
        aliases: &[],
        build: agent::knowledge_compounding,
    },
    SceneEntry {
        name: "NightlyWorkflowScene",
        aliases: &[],
        build: agent::nightly_workflow,
    },
    SceneEntry {
        name: "FullExplainerScene",
        aliases: &[],
        build: agent::full_explainer,
    },
];

const NEURAL_SCENES: &[SceneEntry] = &[
    SceneEntry {
        name: "NeuralNetworkScene",
        aliases: &[],
        build: neural::neural_network,
    },
    SceneEntry {
        name: "HelloScene",
        aliases: &["HelloManimTest"],
        build: neural::hello,
    },
    SceneEntry {
        name: "GradientDescentVisualization",
        aliases: &[],
        build: neural::gradient_descent,
    },
];

/// The two explainer scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    AutonomousAgent,
    NeuralNetwork,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::AutonomousAgent, Script::NeuralNetwork];

    /// Name used on the command line and in output paths.
    pub fn name(self) -> &'static str {
        match self {
            Self::AutonomousAgent => "autonomous_agent",
            Self::NeuralNetwork => "neural_network",
        }
    }

    pub fn scenes(self) -> &'static [SceneEntry] {
        match self {
            Self::AutonomousAgent => AGENT_SCENES,
            Self::NeuralNetwork => NEURAL_SCENES,
        }
    }

    pub fn scene_names(self) -> Vec<&'static str> {
        self.scenes().iter().map(|e| e.name).collect()
    }

    pub fn find(self, scene_name: &str) -> ExplainerResult<&'static SceneEntry> {
        self.scenes()
            .iter()
            .find(|e| e.answers_to(scene_name))
            .ok_or_else(|| ExplainerError::UnknownScene {
                name: scene_name.to_owned(),
                available: self.scene_names().join(", "),
            })
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = ExplainerError;

    /// Accepts the bare script name or its file name (`neural_network.py`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stem = s.trim();
        let stem = std::path::Path::new(stem)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(stem);
        let stem = stem.strip_suffix(".py").unwrap_or(stem);
        Self::ALL
            .into_iter()
            .find(|script| script.name() == stem)
            .ok_or_else(|| ExplainerError::UnknownScene {
                name: s.to_owned(),
                available: Self::ALL.map(Script::name).join(", "),
            })
    }
}

/// Build a scene of `script` by class name or alias.
#[tracing::instrument(level = "debug")]
pub fn build_scene(script: Script, scene_name: &str) -> ExplainerResult<Scene> {
    let entry = script.find(scene_name)?;
    (entry.build)()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/registry.rs"]
mod tests;
