/// Convenience result type used across the crate.
pub type CloudResult<T> = Result<T, CloudError>;

/// Top-level error taxonomy used by the layout and animation APIs.
#[derive(thiserror::Error, Debug)]
pub enum CloudError {
    /// No collision-free candidate position exists for `word`.
    ///
    /// Retry with smaller font sizes or a larger canvas.
    #[error("allocation space exhausted: no free position for word '{word}'")]
    AllocationSpaceExhausted {
        /// Word that could not be placed.
        word: String,
    },

    /// The requested interpolation method is not known.
    #[error("unsupported interpolation method: '{0}'")]
    UnsupportedInterpolationMethod(String),

    /// Invalid user-provided configuration or data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloudError {
    /// Build a [`CloudError::AllocationSpaceExhausted`] value.
    pub fn space_exhausted(word: impl Into<String>) -> Self {
        Self::AllocationSpaceExhausted { word: word.into() }
    }

    /// Build a [`CloudError::UnsupportedInterpolationMethod`] value.
    pub fn unsupported_method(name: impl Into<String>) -> Self {
        Self::UnsupportedInterpolationMethod(name.into())
    }

    /// Build a [`CloudError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CloudError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
