//! # MailHide
//!
//! Hide an email address behind a reveal link that only the remote service can
//! decode. The address is PKCS#7 padded, encrypted with AES-128-CBC under a
//! zero IV using the site's hex private key, URL-safe base64 encoded and
//! placed in a link alongside the site's public key.
//!
//! ```rust,ignore
//! use recaptcha_mailhide::MailHide;
//!
//! let mailhide = MailHide::with_keys("01J_tiDKknxUV8w-2NmMSSMA==", "deadbeefdeadbeefdeadbeefdeadbeef")?;
//! let url = mailhide.url_for("johndoe@example.com")?;
//! let html = mailhide.html_for("johndoe@example.com")?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cipher;
pub mod email;
pub mod encoding;
pub mod error;
pub mod padding;
pub mod url;

pub use cipher::MailHideKey;
pub use email::{partition, EmailParts};
pub use encoding::{decode_url_safe, encode_url_safe};
pub use error::{MailHideError, Result};
pub use padding::{pad, unpad, BLOCK_SIZE};
pub use url::{mailhide_url, MailHide};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{mailhide_url, MailHide, MailHideError, Result};
}
