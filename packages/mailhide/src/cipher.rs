//! AES-128-CBC with an all-zero IV
//!
//! The remote service decrypts MailHide payloads with exactly this
//! construction, so neither the mode nor the IV is configurable. Padding is the
//! caller's job (see [`crate::padding`]); the cipher only accepts whole blocks.

use crate::error::{MailHideError, Result};
use crate::padding::BLOCK_SIZE;
use aes::Aes128;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use std::fmt;
use zeroize::Zeroizing;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// AES-128 key size in bytes
pub const KEY_SIZE: usize = 16;

const ZERO_IV: [u8; 16] = [0u8; 16];

/// Raw MailHide key derived from the hex-encoded private key
///
/// Key bytes are wiped when the value is dropped.
#[derive(Clone)]
pub struct MailHideKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl MailHideKey {
    /// Decode a hex private key into a 128-bit AES key
    ///
    /// # Errors
    ///
    /// Returns [`MailHideError::InvalidKey`] if `private_key` is not valid hex
    /// and [`MailHideError::InvalidKeyLength`] if it does not decode to
    /// exactly 16 bytes.
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let decoded = Zeroizing::new(hex::decode(private_key.trim())?);
        let key: [u8; KEY_SIZE] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| MailHideError::InvalidKeyLength {
                    expected: KEY_SIZE,
                    actual: decoded.len(),
                })?;

        Ok(Self {
            key: Zeroizing::new(key),
        })
    }

    /// Wrap existing key bytes
    #[must_use]
    pub fn from_bytes(key: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }

    /// Encrypt block-aligned plaintext
    ///
    /// # Errors
    ///
    /// Returns [`MailHideError::Encryption`] if `padded` is empty or not a
    /// multiple of the block size.
    pub fn encrypt(&self, padded: &[u8]) -> Result<Vec<u8>> {
        check_aligned(padded)?;

        let mut buf = padded.to_vec();
        let len = buf.len();
        Aes128CbcEnc::new_from_slices(&self.key[..], &ZERO_IV)
            .map_err(|e| MailHideError::Encryption(e.to_string()))?
            .encrypt_padded_mut::<NoPadding>(&mut buf, len)
            .map_err(|e| MailHideError::Encryption(e.to_string()))?;
        Ok(buf)
    }

    /// Decrypt ciphertext produced by [`MailHideKey::encrypt`]
    ///
    /// The result still carries its padding.
    ///
    /// # Errors
    ///
    /// Returns [`MailHideError::Encryption`] if `ciphertext` is empty or not
    /// a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_aligned(ciphertext)?;

        let mut buf = ciphertext.to_vec();
        Aes128CbcDec::new_from_slices(&self.key[..], &ZERO_IV)
            .map_err(|e| MailHideError::Encryption(e.to_string()))?
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|e| MailHideError::Encryption(e.to_string()))?;
        Ok(buf)
    }
}

fn check_aligned(data: &[u8]) -> Result<()> {
    let block = usize::from(BLOCK_SIZE);
    if data.is_empty() || data.len() % block != 0 {
        return Err(MailHideError::Encryption(format!(
            "input of {} bytes is not a non-empty multiple of {block}",
            data.len()
        )));
    }
    Ok(())
}

impl fmt::Debug for MailHideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MailHideKey(REDACTED)")
    }
}
