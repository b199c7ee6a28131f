/// Convenience result type used across figgrid.
pub type FigResult<T> = Result<T, FigError>;

/// Top-level error taxonomy used by composition APIs.
#[derive(thiserror::Error, Debug)]
pub enum FigError {
    /// A required field was never supplied (for example an image box without an image).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A referenced image or font file cannot be located.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// Unrecognized text alignment value.
    #[error("invalid alignment: {0}")]
    InvalidAlignment(String),

    /// A resource exists but could not be decoded (image or font bytes).
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid numeric input such as zero sizes or non-finite angles.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing figure descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FigError {
    /// Build a [`FigError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`FigError::ResourceNotFound`] value.
    pub fn resource_not_found(msg: impl Into<String>) -> Self {
        Self::ResourceNotFound(msg.into())
    }

    /// Build a [`FigError::InvalidAlignment`] value.
    pub fn invalid_alignment(msg: impl Into<String>) -> Self {
        Self::InvalidAlignment(msg.into())
    }

    /// Build a [`FigError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FigError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FigError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
