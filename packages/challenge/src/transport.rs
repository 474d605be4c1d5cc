//! HTTP transport used by the verifier
//!
//! The verifier only needs "POST these form fields, give me the body back",
//! so that is the whole trait. The default implementation wraps a pooled
//! blocking `reqwest` client whose connections are released when the
//! transport is dropped.

use crate::error::Result;

/// Blocking form POST
///
/// Implementations are owned by one [`crate::Verifier`] and are not required
/// to be `Sync`; share across threads with one verifier per thread or a
/// transport that does its own pooling.
pub trait Transport {
    /// POST `fields` as `application/x-www-form-urlencoded` to `url` and
    /// return the response body
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChallengeError::Transport`] on network failure and
    /// [`crate::ChallengeError::HttpStatus`] on a non-success status.
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        (**self).post_form(url, fields)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        (**self).post_form(url, fields)
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::Transport;
    use crate::error::{ChallengeError, Result};
    use recaptcha_common::LoggingTransformer;
    use reqwest::blocking::Client;
    use std::time::Duration;

    /// Blocking HTTP transport backed by `reqwest`
    ///
    /// Must not be created or used from inside an async runtime.
    #[derive(Clone, Debug)]
    pub struct HttpTransport {
        client: Client,
    }

    impl HttpTransport {
        /// Create a transport with the given request timeout
        ///
        /// # Errors
        ///
        /// Returns [`ChallengeError::Transport`] if the HTTP client or its TLS
        /// backend fails to initialize.
        pub fn new(timeout: Duration) -> Result<Self> {
            let client = Client::builder()
                .timeout(timeout)
                .user_agent(concat!("recaptcha-rs/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| ChallengeError::Transport {
                    context: "Failed to initialize HTTP client for verification".to_string(),
                    source: Box::new(e),
                })?;

            Ok(Self { client })
        }

        /// Wrap an already configured client, e.g. one with custom proxy or
        /// TLS settings
        #[must_use]
        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    impl Transport for HttpTransport {
        fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
            LoggingTransformer::log_network_operation("verify POST", url, None);

            let response = self
                .client
                .post(url)
                .form(fields)
                .send()
                .map_err(|e| ChallengeError::Transport {
                    context: format!("Verification request to {url} failed"),
                    source: Box::new(e),
                })?;

            if !response.status().is_success() {
                return Err(ChallengeError::HttpStatus {
                    status: response.status().as_u16(),
                });
            }

            let body = response.text().map_err(|e| ChallengeError::Transport {
                context: "Failed to read verification response".to_string(),
                source: Box::new(e),
            })?;
            LoggingTransformer::log_network_operation("verify response", url, Some(body.len()));
            Ok(body)
        }
    }
}
