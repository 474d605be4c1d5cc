//! Error handling for the MailHide pipeline

use recaptcha_common::ConfigError;
use thiserror::Error;

/// MailHide-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailHideError {
    /// Credentials or service configuration were unusable
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Private key was not valid hex
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Private key decoded to an unsupported length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Email address could not be split into local part and domain
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Padding bytes were missing or inconsistent
    #[error("Padding error: {0}")]
    Padding(String),

    /// Block encryption was handed input it cannot process
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// URL-safe payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<hex::FromHexError> for MailHideError {
    fn from(err: hex::FromHexError) -> Self {
        MailHideError::InvalidKey(format!("Hex decoding error: {err}"))
    }
}

impl From<base64::DecodeError> for MailHideError {
    fn from(err: base64::DecodeError) -> Self {
        MailHideError::Decode(format!("Base64 decode error: {err}"))
    }
}

/// Result type for MailHide operations
pub type Result<T> = std::result::Result<T, MailHideError>;
