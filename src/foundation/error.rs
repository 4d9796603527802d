/// Convenience result type used across roundel.
pub type RoundelResult<T> = Result<T, RoundelError>;

/// Top-level error taxonomy used by the compositing APIs.
#[derive(thiserror::Error, Debug)]
pub enum RoundelError {
    /// Supplied bytes are not a decodable image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Neither a decoded image nor non-empty initials text is available.
    #[error("no input: load an image or enter a name first")]
    NoInput,

    /// Invalid user-provided data (colors, style JSON, preset names, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoundelError {
    /// Build a [`RoundelError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`RoundelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RoundelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
