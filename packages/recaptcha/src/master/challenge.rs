//! Challenge Master Builder
//!
//! Widget markup and verification share one configuration but nothing else;
//! the builder hands out each independently.

#[cfg(feature = "challenge")]
use recaptcha_challenge::{Transport, Verifier, Widget};
#[cfg(feature = "challenge")]
use recaptcha_common::ServiceConfig;

/// Master builder for challenge operations
#[cfg(feature = "challenge")]
pub struct ChallengeMasterBuilder;

#[cfg(feature = "challenge")]
impl ChallengeMasterBuilder {
    /// Bind to a service configuration
    #[must_use]
    pub fn with_config(self, config: &ServiceConfig) -> ChallengeWithConfig {
        ChallengeWithConfig {
            config: config.clone(),
        }
    }
}

/// Challenge builder with configuration
#[cfg(feature = "challenge")]
pub struct ChallengeWithConfig {
    config: ServiceConfig,
}

#[cfg(feature = "challenge")]
impl ChallengeWithConfig {
    /// Widget markup builder
    #[must_use]
    pub fn widget(&self) -> Widget {
        Widget::new(&self.config)
    }

    /// Verifier over a caller-supplied transport
    #[must_use]
    pub fn verifier_with<T: Transport>(&self, transport: T) -> Verifier<T> {
        Verifier::with_transport(&self.config, transport)
    }

    /// Verifier over the blocking HTTP transport
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[cfg(feature = "http")]
    pub fn verifier(&self) -> recaptcha_challenge::Result<Verifier> {
        Verifier::new(&self.config)
    }
}
