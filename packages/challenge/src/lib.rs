//! # reCAPTCHA challenge
//!
//! Render the challenge widget into a page and verify the end user's answer
//! against the remote service.
//!
//! ```rust,ignore
//! use recaptcha_challenge::{Verifier, Widget};
//! use recaptcha_common::ServiceConfig;
//!
//! let config = ServiceConfig::from_env()?;
//! let html = Widget::new(&config).render(None, None)?;
//!
//! let verifier = Verifier::new(&config)?;
//! let outcome = verifier.verify("203.0.113.7", &challenge, &response, &[])?;
//! if !outcome.success {
//!     // re-render with the error code so the widget can show it
//!     let html = Widget::new(&config).render(outcome.error_code.as_deref(), None)?;
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod signup;
pub mod transport;
pub mod verify;
pub mod widget;

pub use error::{ChallengeError, Result};
pub use signup::signup_url;
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::Transport;
pub use verify::{parse_response, VerificationOutcome, Verifier, INCORRECT_CAPTCHA_SOL};
pub use widget::{
    widget_markup, RecaptchaOptions, Theme, Widget, WidgetOptions, CHALLENGE_FIELD,
    RESPONSE_FIELD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ChallengeError, Result, Transport, VerificationOutcome, Verifier, Widget};
}
