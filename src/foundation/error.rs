/// Convenience result type used across slidefit.
pub type SlideFitResult<T> = Result<T, SlideFitError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SlideFitError {
    /// Invalid user-provided deck or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Element geometry that breaks a layout precondition (non-positive or
    /// non-finite sizes, no vertical space left to share).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideFitError {
    /// Build a [`SlideFitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlideFitError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`SlideFitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
