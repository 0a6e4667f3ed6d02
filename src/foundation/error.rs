/// Convenience result type used across reelgraph.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by loading, normalization and generation APIs.
///
/// Frame evaluation never fails; these errors only surface at the configuration boundary.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided or generated configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters (spring constants, ranges).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The external script generator failed to produce a response.
    #[error("generation error: {0}")]
    Generation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ReelError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
