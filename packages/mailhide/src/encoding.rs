//! URL-safe base64 for MailHide payloads
//!
//! The remote decoder expects the standard alphabet with `+`/`/` swapped for
//! `-`/`_` and `=` padding kept, which is exactly the padded `URL_SAFE` engine.

use crate::error::Result;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};

/// Encode bytes for embedding in a query parameter
#[must_use]
pub fn encode_url_safe(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

/// Decode a payload produced by [`encode_url_safe`]
///
/// # Errors
///
/// Returns [`crate::MailHideError::Decode`] on characters outside the URL-safe
/// alphabet or malformed padding.
pub fn decode_url_safe(encoded: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE.decode(encoded)?)
}
