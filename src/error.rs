//! Error types for the point indexes.

use thiserror::Error;

/// Errors raised by index operations and configuration loading.
#[derive(Debug, Error)]
pub enum KdError {
    /// A required argument is undefined: a non-finite coordinate or an
    /// inverted rectangle. Detected before any traversal or mutation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, KdError>;
