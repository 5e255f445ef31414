/// Convenience result type used across inkwire.
pub type InkwireResult<T> = Result<T, InkwireError>;

/// Top-level error taxonomy used by toolkit APIs.
#[derive(thiserror::Error, Debug)]
pub enum InkwireError {
    /// Operation requested for an attribute the element does not support.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Required collaborator missing or invalid at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed attribute literal or mismatched animation value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failed to write an exported image asset.
    #[error("could not write image file '{file}'")]
    ImageWrite {
        /// Target file the encoder was writing.
        file: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkwireError {
    /// Build an [`InkwireError::UnsupportedOperation`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    /// Build an [`InkwireError::InvalidConfiguration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build an [`InkwireError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
