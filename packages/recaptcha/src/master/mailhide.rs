//! MailHide Master Builder

#[cfg(feature = "mailhide")]
use recaptcha_common::ServiceConfig;

/// Master builder for MailHide links
#[cfg(feature = "mailhide")]
pub struct MailHideMasterBuilder;

#[cfg(feature = "mailhide")]
impl MailHideMasterBuilder {
    /// Bind to a service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is not a 128-bit hex key.
    pub fn with_config(
        self,
        config: &ServiceConfig,
    ) -> recaptcha_mailhide::Result<recaptcha_mailhide::MailHide> {
        recaptcha_mailhide::MailHide::new(config)
    }

    /// Bind to a raw key pair against the public service
    ///
    /// # Errors
    ///
    /// Returns an error if either key is empty or the private key is not a
    /// 128-bit hex key.
    pub fn with_keys(
        self,
        public_key: &str,
        private_key: &str,
    ) -> recaptcha_mailhide::Result<recaptcha_mailhide::MailHide> {
        recaptcha_mailhide::MailHide::with_keys(public_key, private_key)
    }
}
