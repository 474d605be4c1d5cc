//! Unified error type for applications using several features at once

use thiserror::Error;

/// Any error produced by the recaptcha crates
#[derive(Debug, Error)]
pub enum RecaptchaError {
    /// Credentials or service configuration were unusable
    #[error(transparent)]
    Config(#[from] recaptcha_common::ConfigError),

    /// MailHide link generation failed
    #[cfg(feature = "mailhide")]
    #[cfg_attr(docsrs, doc(cfg(feature = "mailhide")))]
    #[error(transparent)]
    MailHide(#[from] recaptcha_mailhide::MailHideError),

    /// Widget rendering or verification failed
    #[cfg(feature = "challenge")]
    #[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
    #[error(transparent)]
    Challenge(#[from] recaptcha_challenge::ChallengeError),
}

/// Result type using [`RecaptchaError`]
pub type Result<T> = std::result::Result<T, RecaptchaError>;
