//! Server-side verification of a solved challenge
//!
//! Wire contract: POST `privatekey`, `remoteip`, `challenge`, `response` (plus
//! any caller extras) to the verify endpoint; the body's first line is `true`
//! or `false` and, on failure, the second line is an error code.

use crate::error::{ChallengeError, Result};
use crate::transport::Transport;
use recaptcha_common::{Credentials, LoggingTransformer, ServiceConfig};
use serde::{Deserialize, Serialize};

/// Error code reported for an empty challenge or response
pub const INCORRECT_CAPTCHA_SOL: &str = "incorrect-captcha-sol";

/// Result of one verification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Whether the end user solved the challenge
    pub success: bool,
    /// Service error code, present only when `success` is false
    pub error_code: Option<String>,
}

impl VerificationOutcome {
    /// A solved challenge
    #[must_use]
    pub fn solved() -> Self {
        Self {
            success: true,
            error_code: None,
        }
    }

    /// A rejected challenge with its error code
    #[must_use]
    pub fn rejected(error_code: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: Some(error_code.into()),
        }
    }
}

/// Parse the two-line verification reply
///
/// # Errors
///
/// Returns [`ChallengeError::Protocol`] if the body is empty, or if the first
/// line is not `true` and no error code follows it.
pub fn parse_response(body: &str) -> Result<VerificationOutcome> {
    let mut lines = body.lines().map(str::trim);

    let verdict = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or_else(|| ChallengeError::Protocol("empty verification response".to_string()))?;

    if verdict == "true" {
        return Ok(VerificationOutcome::solved());
    }

    match lines.next().filter(|line| !line.is_empty()) {
        Some(code) => Ok(VerificationOutcome::rejected(code)),
        None => Err(ChallengeError::Protocol(format!(
            "verdict {verdict:?} without an error code"
        ))),
    }
}

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Verification client bound to one site's private key
///
/// Owns its transport; dropping the verifier releases any pooled
/// connections.
pub struct Verifier<T = DefaultTransport> {
    credentials: Credentials,
    endpoint: String,
    transport: T,
}

/// Transport used by [`Verifier::new`]
#[cfg(feature = "http")]
pub type DefaultTransport = HttpTransport;

/// Transport used by [`Verifier::new`]
#[cfg(not(feature = "http"))]
pub type DefaultTransport = Box<dyn Transport>;

#[cfg(feature = "http")]
impl Verifier<HttpTransport> {
    /// Create a verifier over the blocking HTTP transport
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Verifier<T> {
    /// Create a verifier over a caller-supplied transport
    #[must_use]
    pub fn with_transport(config: &ServiceConfig, transport: T) -> Self {
        Self {
            credentials: config.credentials.clone(),
            endpoint: config.verify_server.clone(),
            transport,
        }
    }

    /// URL verification requests are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Verify the end user's answer
    ///
    /// An empty `challenge` or `response` yields a negative outcome with
    /// [`INCORRECT_CAPTCHA_SOL`] without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::MissingRemoteIp`] if `remote_ip` is empty,
    /// transport errors unchanged, and [`ChallengeError::Protocol`] if the
    /// reply is malformed.
    pub fn verify(
        &self,
        remote_ip: &str,
        challenge: &str,
        response: &str,
        extra_fields: &[(&str, &str)],
    ) -> Result<VerificationOutcome> {
        if remote_ip.trim().is_empty() {
            return Err(ChallengeError::MissingRemoteIp);
        }

        if challenge.is_empty() || response.is_empty() {
            tracing::debug!(remote_ip, "Empty challenge or response, skipping remote call");
            let outcome = VerificationOutcome::rejected(INCORRECT_CAPTCHA_SOL);
            LoggingTransformer::log_verification(remote_ip, false, outcome.error_code.as_deref());
            return Ok(outcome);
        }

        let mut fields = Vec::with_capacity(4 + extra_fields.len());
        fields.push(("privatekey", self.credentials.private_key()));
        fields.push(("remoteip", remote_ip));
        fields.push(("challenge", challenge));
        fields.push(("response", response));
        fields.extend_from_slice(extra_fields);

        tracing::debug!(
            endpoint = %self.endpoint,
            key = %LoggingTransformer::key_fingerprint(self.credentials.private_key()),
            extra_fields = extra_fields.len(),
            "Posting verification request"
        );

        let body = self.transport.post_form(&self.endpoint, &fields)?;
        let outcome = parse_response(&body)?;

        LoggingTransformer::log_verification(remote_ip, outcome.success, outcome.error_code.as_deref());
        Ok(outcome)
    }

    /// Take the transport back, releasing the verifier
    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }
}
