//! Error types for widget rendering and response verification

use recaptcha_common::ConfigError;
use thiserror::Error;

/// Challenge-specific errors
///
/// A wrong answer is not an error: it comes back as a negative
/// [`crate::VerificationOutcome`].
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// Credentials or service configuration were unusable
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The caller did not supply the end user's IP address
    #[error("Missing remote IP: the end user's address is required for verification")]
    MissingRemoteIp,

    /// The verification service answered outside its two-line contract
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The HTTP exchange itself failed
    #[error("Transport error: {context}")]
    Transport {
        /// What the transport was doing
        context: String,
        /// Underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The verification endpoint answered with a non-success status
    #[error("Verification server returned status: {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Widget options could not be serialized to JSON
    #[error("Options serialization error: {0}")]
    Options(String),
}

impl From<serde_json::Error> for ChallengeError {
    fn from(err: serde_json::Error) -> Self {
        ChallengeError::Options(err.to_string())
    }
}

/// Result type for challenge operations
pub type Result<T> = std::result::Result<T, ChallengeError>;
