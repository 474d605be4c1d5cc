//! Master builder for all recaptcha operations
//!
//! This module provides the unified entry point, decomposed by feature.

pub mod challenge;
pub mod core;
pub mod mailhide;

// Re-export main types
pub use self::core::Recaptcha;

#[cfg(feature = "challenge")]
pub use challenge::{ChallengeMasterBuilder, ChallengeWithConfig};

#[cfg(feature = "mailhide")]
pub use mailhide::MailHideMasterBuilder;
