//! Split an address into the part shown on the page and the part hidden behind
//! the reveal link

use crate::error::{MailHideError, Result};

/// Displayable pieces of an email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailParts {
    /// Leading characters of the local part, shown before the `...` link
    pub visible: String,
    /// Domain, everything after the first `@`
    pub hidden: String,
}

/// Partition `email` at its first `@`
///
/// The visible prefix depends on the local-part length `L` (in characters):
/// one character when `L <= 4`, three when `L <= 6`, four otherwise.
///
/// # Errors
///
/// Returns [`MailHideError::InvalidEmail`] if `email` contains no `@`.
pub fn partition(email: &str) -> Result<EmailParts> {
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| MailHideError::InvalidEmail(format!("{email:?} has no '@'")))?;

    let shown = match local.chars().count() {
        0..=4 => 1,
        5..=6 => 3,
        _ => 4,
    };

    Ok(EmailParts {
        visible: local.chars().take(shown).collect(),
        hidden: domain.to_string(),
    })
}
