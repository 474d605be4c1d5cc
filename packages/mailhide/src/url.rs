//! MailHide reveal links and the HTML snippet that embeds them

use crate::cipher::MailHideKey;
use crate::email::partition;
use crate::encoding::encode_url_safe;
use crate::error::Result;
use crate::padding::{pad, BLOCK_SIZE};
use recaptcha_common::{LoggingTransformer, ServiceConfig};

/// Popup geometry used by the reveal link's `onclick` handler
const POPUP_FEATURES: &str =
    "toolbar=0,scrollbars=0,location=0,statusbar=0,menubar=0,resizable=0,width=500,height=300";

/// MailHide link builder bound to one site's key pair
///
/// The AES key is derived once at construction; every call afterwards is a
/// pure function of the email address.
#[derive(Clone, Debug)]
pub struct MailHide {
    public_key: String,
    key: MailHideKey,
    server: String,
}

impl MailHide {
    /// Build from a service configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::MailHideError::InvalidKey`] or
    /// [`crate::MailHideError::InvalidKeyLength`] if the private key is not a
    /// 32-character hex string.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let credentials = &config.credentials;
        let key = MailHideKey::from_hex(credentials.private_key()).inspect_err(|e| {
            LoggingTransformer::log_crypto_error("MailHide key derivation", e);
        })?;

        tracing::debug!(
            public_key = %credentials.public_key(),
            key = %LoggingTransformer::key_fingerprint(credentials.private_key()),
            "MailHide key derived"
        );

        Ok(Self {
            public_key: credentials.public_key().to_string(),
            key,
            server: config.mailhide_server.trim_end_matches('/').to_string(),
        })
    }

    /// Build against the public service from a raw key pair
    ///
    /// # Errors
    ///
    /// Returns [`crate::MailHideError::Configuration`] if either key is empty,
    /// otherwise the errors of [`MailHide::new`].
    pub fn with_keys(public_key: &str, private_key: &str) -> Result<Self> {
        Self::new(&ServiceConfig::with_keys(public_key, private_key)?)
    }

    /// Public key embedded in every link
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Pad, encrypt and URL-safe encode an address
    ///
    /// # Errors
    ///
    /// Propagates [`crate::MailHideError::Encryption`]; padded input is always
    /// block-aligned so this only fails on a broken cipher backend.
    pub fn encrypt_email(&self, email: &str) -> Result<String> {
        let padded = pad(email.as_bytes(), BLOCK_SIZE);
        let ciphertext = self.key.encrypt(&padded)?;
        Ok(encode_url_safe(&ciphertext))
    }

    /// Reveal link for `email`
    ///
    /// # Errors
    ///
    /// See [`MailHide::encrypt_email`].
    pub fn url_for(&self, email: &str) -> Result<String> {
        let payload = self.encrypt_email(email)?;
        let url = format!(
            "{}/mailhide/d?k={}&c={payload}",
            self.server, self.public_key
        );
        tracing::debug!(payload_len = payload.len(), "MailHide URL built");
        Ok(url)
    }

    /// HTML snippet showing the start of the local part, a `...` reveal link
    /// and the domain
    ///
    /// # Errors
    ///
    /// Returns [`crate::MailHideError::InvalidEmail`] if `email` has no `@`.
    pub fn html_for(&self, email: &str) -> Result<String> {
        let parts = partition(email)?;
        let url = escape_attribute(&self.url_for(email)?);

        Ok(format!(
            "{visible}<a href='{url}' onclick=\"window.open('{url}', '', '{POPUP_FEATURES}'); return false;\" title=\"Reveal this e-mail address\">...</a>@{domain}",
            visible = ammonia::clean_text(&parts.visible),
            domain = ammonia::clean_text(&parts.hidden),
        ))
    }
}

/// Entity-escape a quoted attribute value
///
/// `ammonia::clean_text` would also rewrite `/` and `=`, so URLs only get the
/// five characters that can end or break out of the attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reveal link for `email` against the public service
///
/// Identical inputs always produce an identical URL.
///
/// # Errors
///
/// Returns the errors of [`MailHide::with_keys`].
pub fn mailhide_url(email: &str, public_key: &str, private_key: &str) -> Result<String> {
    MailHide::with_keys(public_key, private_key)?.url_for(email)
}
