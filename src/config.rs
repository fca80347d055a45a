use std::path::PathBuf;

use crate::{
    foundation::{
        core::{Canvas, Fps},
        error::{ExplainerError, ExplainerResult},
    },
    render::pipeline::{RenderSettings, RenderThreading},
};

/// Output quality preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Quality {
    /// 854x480 at 15 fps.
    Low,
    /// 1280x720 at 30 fps.
    Medium,
    /// 1920x1080 at 60 fps.
    #[default]
    High,
    /// 3840x2160 at 60 fps.
    FourK,
}

impl Quality {
    pub const ALL: [Quality; 4] = [Self::Low, Self::Medium, Self::High, Self::FourK];

    pub fn canvas(self) -> Canvas {
        let (width, height) = match self {
            Self::Low => (854, 480),
            Self::Medium => (1280, 720),
            Self::High => (1920, 1080),
            Self::FourK => (3840, 2160),
        };
        Canvas { width, height }
    }

    pub fn fps(self) -> Fps {
        let num = match self {
            Self::Low => 15,
            Self::Medium => 30,
            Self::High | Self::FourK => 60,
        };
        Fps { num, den: 1 }
    }

    /// Directory name under `videos/<script>/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Low => "480p15",
            Self::Medium => "720p30",
            Self::High => "1080p60",
            Self::FourK => "2160p60",
        }
    }

    pub fn settings(self) -> RenderSettings {
        RenderSettings {
            canvas: self.canvas(),
            fps: self.fps(),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = ExplainerError;

    /// Accepts the one-letter flags (`l`, `m`, `h`, `k`) and the long names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::Low),
            "m" | "medium" => Ok(Self::Medium),
            "h" | "high" => Ok(Self::High),
            "k" | "4k" | "fourk" => Ok(Self::FourK),
            other => Err(ExplainerError::validation(format!(
                "unknown quality '{other}' (expected l, m, h or k)"
            ))),
        }
    }
}

/// Everything a render invocation needs besides the scene itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub quality: Quality,
    /// Open the result after rendering.
    pub preview: bool,
    /// Root of the output tree.
    pub output_dir: PathBuf,
    /// Rasterize frames in parallel.
    pub parallel: bool,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            preview: false,
            output_dir: PathBuf::from("media"),
            parallel: false,
            overwrite: true,
        }
    }
}

impl RenderConfig {
    /// `<output_dir>/videos/<script>/<quality dir>/<scene>.mp4`
    pub fn output_path(&self, script: &str, scene: &str) -> ExplainerResult<PathBuf> {
        for (what, value) in [("script", script), ("scene", scene)] {
            if value.is_empty() || value.contains(['/', '\\']) || value == ".." {
                return Err(ExplainerError::validation(format!(
                    "{what} name '{value}' cannot be used as a path component"
                )));
            }
        }
        Ok(self
            .output_dir
            .join("videos")
            .join(script)
            .join(self.quality.dir_name())
            .join(format!("{scene}.mp4")))
    }

    pub fn threading(&self) -> RenderThreading {
        RenderThreading {
            parallel: self.parallel,
            ..RenderThreading::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
