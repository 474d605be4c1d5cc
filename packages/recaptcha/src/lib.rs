//! # reCAPTCHA - Unified Client Library
//!
//! Challenge widget markup, server-side answer verification and MailHide
//! email obfuscation, feature-gated so each can be used alone.
//!
//! ## Features
//!
//! - `mailhide` - MailHide reveal links (AES-128-CBC, URL-safe base64)
//! - `challenge` - Widget markup and verification over any `Transport`
//! - `http` - Blocking `reqwest` transport for verification
//!
//! All three are on by default.
//!
//! ## Example
//!
//! ```rust,ignore
//! use recaptcha::{Recaptcha, ServiceConfig};
//!
//! fn example() -> recaptcha::Result<()> {
//!     let config = ServiceConfig::from_env()?;
//!
//!     // Page rendering
//!     let challenge = Recaptcha::challenge().with_config(&config);
//!     let widget_html = challenge.widget().render(None, None)?;
//!
//!     // Form submission
//!     let outcome = challenge
//!         .verifier()?
//!         .verify("203.0.113.7", "challenge-token", "user answer", &[])?;
//!     if !outcome.success {
//!         log::warn!("rejected: {:?}", outcome.error_code);
//!     }
//!
//!     // Obfuscated contact address
//!     let link = Recaptcha::mailhide()
//!         .with_config(&config)?
//!         .url_for("johndoe@example.com")?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod error;
mod master;

pub use error::{RecaptchaError, Result};
pub use master::Recaptcha;

#[cfg(feature = "challenge")]
#[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
pub use master::{ChallengeMasterBuilder, ChallengeWithConfig};

#[cfg(feature = "mailhide")]
#[cfg_attr(docsrs, doc(cfg(feature = "mailhide")))]
pub use master::MailHideMasterBuilder;

// === Shared configuration and logging ===
pub use recaptcha_common::{ConfigError, Credentials, LoggingTransformer, ServiceConfig};

// === MailHide ===
#[cfg(feature = "mailhide")]
#[cfg_attr(docsrs, doc(cfg(feature = "mailhide")))]
pub use recaptcha_mailhide::{mailhide_url, MailHide, MailHideError};

// === Challenge ===
#[cfg(feature = "challenge")]
#[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
pub use recaptcha_challenge::{
    signup_url, widget_markup, ChallengeError, RecaptchaOptions, Theme, Transport,
    VerificationOutcome, Verifier, Widget, WidgetOptions,
};

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub use recaptcha_challenge::HttpTransport;

/// Re-exported crates for direct access to every module
pub mod crates {
    pub use recaptcha_common as common;

    #[cfg(feature = "challenge")]
    #[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
    pub use recaptcha_challenge as challenge;

    #[cfg(feature = "mailhide")]
    #[cfg_attr(docsrs, doc(cfg(feature = "mailhide")))]
    pub use recaptcha_mailhide as mailhide;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Recaptcha, RecaptchaError, Result, ServiceConfig};

    #[cfg(feature = "mailhide")]
    #[cfg_attr(docsrs, doc(cfg(feature = "mailhide")))]
    pub use crate::MailHide;

    #[cfg(feature = "challenge")]
    #[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
    pub use crate::{VerificationOutcome, Verifier, Widget};
}
