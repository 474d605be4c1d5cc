//! Structured logging infrastructure
//!
//! Library code emits `tracing` events (forwarded to `log`); applications and
//! tests install an `env_logger` backend through [`LoggingTransformer`].
//! Private keys never reach a log line in clear, only a short SHA-256
//! fingerprint.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and the handful of structured log helpers shared by the crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=recaptcha_challenge=debug,recaptcha_mailhide=warn` - Per crate
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Short, stable fingerprint of a secret for log correlation
    ///
    /// Returns `#` followed by the first 12 hex characters of its SHA-256.
    #[must_use]
    pub fn key_fingerprint(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }

    /// Log the result of a verification round-trip
    pub fn log_verification(remote_ip: &str, success: bool, error_code: Option<&str>) {
        if success {
            info!("Verification succeeded for {remote_ip}");
        } else {
            warn!(
                "Verification failed for {remote_ip} (error_code: {})",
                error_code.unwrap_or("unknown")
            );
        }
    }

    /// Log network operations with connection details
    pub fn log_network_operation(
        operation: &str,
        remote_addr: &str,
        bytes_transferred: Option<usize>,
    ) {
        match bytes_transferred {
            Some(bytes) => debug!("Network: {operation} to {remote_addr} ({bytes} bytes)"),
            None => debug!("Network: {operation} to {remote_addr}"),
        }
    }

    /// Log a cryptographic failure
    ///
    /// Only the error's `Display` text is logged; error messages in these
    /// crates never carry key material.
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!("{}", Self::crypto_error_line(operation, error));
    }

    fn crypto_error_line(operation: &str, error: &dyn std::error::Error) -> String {
        format!("Cryptographic operation failed: {operation}: {error}")
    }
}
