use crate::graph::layout::LayoutError;

/// Convenience result type used across mathscene.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy. Every failure aborts the running scene.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid scene input (malformed graph, bad config, unknown ids).
    #[error("validation error: {0}")]
    Validation(String),

    /// A layout strategy could not be selected or computed.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Invalid animation requests (mismatched transforms, conflicting targets).
    #[error("animation error: {0}")]
    Animation(String),

    /// Failures while evaluating geometry or rasterizing a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Non-finite or degenerate numerical results.
    #[error("numeric error: {0}")]
    Numeric(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SceneError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`SceneError::Numeric`] value.
    pub fn numeric(msg: impl Into<String>) -> Self {
        Self::Numeric(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
