/// Convenience result type used across the crate.
pub type ExplainerResult<T> = Result<T, ExplainerError>;

/// Top-level error taxonomy used by scene, layout and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum ExplainerError {
    /// A layout was requested with an impossible shape (for example zero points).
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Invalid scene construction (unknown element ids, bad sizes, bad presets).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation step or timing parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating or rendering a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// A scene name that no script defines.
    #[error("unknown scene '{name}' (available: {available})")]
    UnknownScene {
        /// Requested scene or script name.
        name: String,
        /// Comma-separated list of valid names.
        available: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExplainerError {
    /// Build an [`ExplainerError::InvalidLayout`] value.
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    /// Build an [`ExplainerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ExplainerError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`ExplainerError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build an [`ExplainerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
