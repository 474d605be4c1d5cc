//! Common infrastructure for the recaptcha crates
//!
//! This crate provides shared functionality used across the workspace:
//! - Credentials and remote service configuration
//! - Configuration errors
//! - Logging setup and secret-safe log helpers

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    Credentials, ServiceConfig, DEFAULT_API_SECURE_SERVER, DEFAULT_API_SERVER,
    DEFAULT_MAILHIDE_SERVER, DEFAULT_SIGNUP_SERVER, DEFAULT_VERIFY_SERVER,
};
pub use error::{ConfigError, Result};
pub use logging::LoggingTransformer;
