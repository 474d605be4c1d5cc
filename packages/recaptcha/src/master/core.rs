//! Core Master Builder
//!
//! Main entry point for all recaptcha operations

#[cfg(feature = "challenge")]
use super::ChallengeMasterBuilder;

#[cfg(feature = "mailhide")]
use super::MailHideMasterBuilder;

/// Master builder providing the unified entry point
pub struct Recaptcha;

impl Recaptcha {
    /// Entry point for MailHide links
    /// Example: `Recaptcha::mailhide().with_config(&config)?.url_for(email)?`
    #[cfg(feature = "mailhide")]
    #[cfg_attr(docsrs, doc(cfg(feature = "mailhide")))]
    #[must_use]
    pub fn mailhide() -> MailHideMasterBuilder {
        MailHideMasterBuilder
    }

    /// Entry point for the challenge widget and verification
    /// Example: `Recaptcha::challenge().with_config(&config).verifier()?`
    #[cfg(feature = "challenge")]
    #[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
    #[must_use]
    pub fn challenge() -> ChallengeMasterBuilder {
        ChallengeMasterBuilder
    }

    /// Key registration page for `domain`
    #[cfg(feature = "challenge")]
    #[cfg_attr(docsrs, doc(cfg(feature = "challenge")))]
    #[must_use]
    pub fn signup_url(domain: &str, app_name: &str) -> String {
        recaptcha_challenge::signup_url(domain, app_name)
    }
}
