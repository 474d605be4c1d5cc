//! Configuration errors shared by every recaptcha crate

use thiserror::Error;

/// Errors raised while building credentials or a service configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key was empty or absent
    #[error("Missing {0}: a non-empty key is required")]
    MissingKey(&'static str),

    /// A required environment variable was not set
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// An environment variable or config field had an unusable value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Serialized configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
