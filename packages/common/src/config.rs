//! Remote service configuration shared by MailHide and challenge verification
//!
//! `ServiceConfig` is a plain value object: credentials plus the endpoint
//! URLs of the remote service. Both feature crates take it by reference and
//! never mutate it.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Challenge API server used when SSL is off
pub const DEFAULT_API_SERVER: &str = "http://www.google.com/recaptcha/api";
/// Challenge API server used when SSL is on
pub const DEFAULT_API_SECURE_SERVER: &str = "https://www.google.com/recaptcha/api";
/// Endpoint receiving verification POSTs
pub const DEFAULT_VERIFY_SERVER: &str = "http://www.google.com/recaptcha/api/verify";
/// Base of MailHide reveal links
pub const DEFAULT_MAILHIDE_SERVER: &str = "http://www.google.com/recaptcha";
/// Key signup page
pub const DEFAULT_SIGNUP_SERVER: &str = "https://www.google.com/recaptcha/admin/create";

/// Environment variable holding the public key
pub const ENV_PUBLIC_KEY: &str = "RECAPTCHA_PUBLIC_KEY";
/// Environment variable holding the private key
pub const ENV_PRIVATE_KEY: &str = "RECAPTCHA_PRIVATE_KEY";
/// Optional environment variable toggling SSL endpoints
pub const ENV_USE_SSL: &str = "RECAPTCHA_USE_SSL";

/// Public/private key pair issued by the remote service
///
/// Both keys are non-empty however the pair is built; deserialization goes
/// through [`Credentials::new`] as well. The private key is wiped from memory
/// when the value is dropped and is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(try_from = "RawCredentials")]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

/// Unchecked wire form of [`Credentials`]
#[derive(Deserialize)]
struct RawCredentials {
    public_key: String,
    private_key: String,
}

impl TryFrom<RawCredentials> for Credentials {
    type Error = ConfigError;

    fn try_from(raw: RawCredentials) -> Result<Self> {
        Self::new(raw.public_key, raw.private_key)
    }
}

impl Credentials {
    /// Create a validated credential pair
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if either key is empty or only
    /// whitespace.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Result<Self> {
        let credentials = Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Re-check the non-empty invariant
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] naming the first empty key.
    pub fn validate(&self) -> Result<()> {
        if self.public_key.trim().is_empty() {
            return Err(ConfigError::MissingKey("public key"));
        }
        if self.private_key.trim().is_empty() {
            return Err(ConfigError::MissingKey("private key"));
        }
        Ok(())
    }

    /// The public (site) key, safe to embed in pages and links
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The private (secret) key
    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"REDACTED")
            .finish()
    }
}

/// Credentials plus the remote endpoints they are used against
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Key pair for this site
    pub credentials: Credentials,
    /// Challenge API base used over plain HTTP
    #[serde(default = "default_api_server")]
    pub api_server: String,
    /// Challenge API base used over HTTPS
    #[serde(default = "default_api_secure_server")]
    pub api_secure_server: String,
    /// Full URL of the verification endpoint
    #[serde(default = "default_verify_server")]
    pub verify_server: String,
    /// Base of MailHide reveal links
    #[serde(default = "default_mailhide_server")]
    pub mailhide_server: String,
    /// Serve widget resources over HTTPS
    #[serde(default)]
    pub use_ssl: bool,
    /// Timeout applied by the default HTTP transport, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_server() -> String {
    DEFAULT_API_SERVER.to_string()
}

fn default_api_secure_server() -> String {
    DEFAULT_API_SECURE_SERVER.to_string()
}

fn default_verify_server() -> String {
    DEFAULT_VERIFY_SERVER.to_string()
}

fn default_mailhide_server() -> String {
    DEFAULT_MAILHIDE_SERVER.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl ServiceConfig {
    /// Configuration pointing at the public service endpoints
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_server: default_api_server(),
            api_secure_server: default_api_secure_server(),
            verify_server: default_verify_server(),
            mailhide_server: default_mailhide_server(),
            use_ssl: false,
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Shorthand for `ServiceConfig::new(Credentials::new(..)?)`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if either key is empty.
    pub fn with_keys(public_key: impl Into<String>, private_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Credentials::new(public_key, private_key)?))
    }

    /// Parse a JSON document; missing endpoint fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or empty credentials,
    /// and [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "timeout must be positive".to_string(),
            });
        }
        tracing::debug!(
            public_key = %config.credentials.public_key(),
            use_ssl = config.use_ssl,
            "Loaded service configuration from JSON"
        );
        Ok(config)
    }

    /// Build a configuration from `RECAPTCHA_PUBLIC_KEY`,
    /// `RECAPTCHA_PRIVATE_KEY` and the optional `RECAPTCHA_USE_SSL`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if a key variable is unset,
    /// [`ConfigError::MissingKey`] if it is empty and
    /// [`ConfigError::InvalidValue`] if `RECAPTCHA_USE_SSL` is not a boolean.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with a caller-supplied variable source
    ///
    /// # Errors
    ///
    /// See [`ServiceConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let public_key = lookup(ENV_PUBLIC_KEY).ok_or(ConfigError::MissingEnv(ENV_PUBLIC_KEY))?;
        let private_key = lookup(ENV_PRIVATE_KEY).ok_or(ConfigError::MissingEnv(ENV_PRIVATE_KEY))?;
        let use_ssl = match lookup(ENV_USE_SSL) {
            Some(raw) => parse_flag(&raw)?,
            None => false,
        };

        Ok(Self::new(Credentials::new(public_key, private_key)?).with_ssl(use_ssl))
    }

    /// Toggle HTTPS endpoints for widget markup
    #[must_use]
    pub fn with_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    /// Override the HTTP transport timeout
    ///
    /// Kept at millisecond precision; anything shorter rounds up to 1ms.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self
    }

    /// Override the verification endpoint
    #[must_use]
    pub fn with_verify_server(mut self, url: impl Into<String>) -> Self {
        self.verify_server = url.into();
        self
    }

    /// Override the MailHide link base
    #[must_use]
    pub fn with_mailhide_server(mut self, url: impl Into<String>) -> Self {
        self.mailhide_server = url.into();
        self
    }

    /// Challenge API base matching the SSL flag
    #[must_use]
    pub fn api_server(&self, use_ssl: bool) -> &str {
        if use_ssl {
            &self.api_secure_server
        } else {
            &self.api_server
        }
    }

    /// Transport timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field: ENV_USE_SSL,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}
