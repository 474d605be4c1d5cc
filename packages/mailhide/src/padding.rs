//! PKCS#7 block padding
//!
//! `pad` appends `n` bytes of value `n`, where `n` is the distance to the next
//! block boundary. Input that is already aligned gains a full extra block, so
//! padding is always present and always removable.

use crate::error::{MailHideError, Result};

/// Cipher block size used by the MailHide pipeline
pub const BLOCK_SIZE: u8 = 16;

/// Pad `data` to a multiple of `block_size`
///
/// A `block_size` of zero is treated as one.
#[must_use]
pub fn pad(data: &[u8], block_size: u8) -> Vec<u8> {
    let block = usize::from(block_size.max(1));
    let count = block - data.len() % block;

    let mut padded = Vec::with_capacity(data.len() + count);
    padded.extend_from_slice(data);
    // count <= block <= 255
    padded.resize(data.len() + count, count as u8);
    padded
}

/// Remove padding added by [`pad`]
///
/// # Errors
///
/// Returns [`MailHideError::Padding`] if `data` is empty or not block-aligned,
/// if the pad count is zero or larger than a block, or if any padding byte
/// differs from the pad count.
pub fn unpad(data: &[u8], block_size: u8) -> Result<Vec<u8>> {
    if block_size == 0 {
        return Err(MailHideError::Padding("block size must be non-zero".into()));
    }
    let block = usize::from(block_size);

    let Some(&last) = data.last() else {
        return Err(MailHideError::Padding("input is empty".into()));
    };
    if data.len() % block != 0 {
        return Err(MailHideError::Padding(format!(
            "input length {} is not a multiple of {block}",
            data.len()
        )));
    }

    let count = usize::from(last);
    if count == 0 || count > block {
        return Err(MailHideError::Padding(format!(
            "pad count {count} outside 1..={block}"
        )));
    }

    let (body, tail) = data.split_at(data.len() - count);
    if tail.iter().any(|&byte| byte != last) {
        return Err(MailHideError::Padding("padding bytes are inconsistent".into()));
    }
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        assert_eq!(pad(b"YELLOW SUBMARINE", 20), b"YELLOW SUBMARINE\x04\x04\x04\x04");
        assert_eq!(pad(b"abc", 4), b"abc\x01");
    }

    #[test]
    fn aligned_input_gains_full_block() {
        let padded = pad(&[0xAA; 16], BLOCK_SIZE);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));

        assert_eq!(pad(b"", BLOCK_SIZE), vec![16u8; 16]);
    }

    #[test]
    fn zero_block_size_acts_as_one() {
        assert_eq!(pad(b"ab", 0), b"ab\x01");
    }

    #[test]
    fn unpad_rejects_bad_padding() {
        assert!(unpad(b"", BLOCK_SIZE).is_err());
        assert!(unpad(b"ICE ICE BABY\x05\x05\x05\x05", BLOCK_SIZE).is_err());
        assert!(unpad(b"ICE ICE BABY\x01\x02\x03\x04", BLOCK_SIZE).is_err());
        assert!(unpad(b"ICE ICE BABY\x04\x04\x04\x00", BLOCK_SIZE).is_err());
        assert!(unpad(b"ICE ICE BABY\x04\x04\x04", BLOCK_SIZE).is_err());
        assert!(unpad(&[17u8; 16], BLOCK_SIZE).is_err());
        assert!(unpad(b"abcd", 0).is_err());
    }

    #[test]
    fn unpad_strips_valid_padding() {
        assert_eq!(
            unpad(b"ICE ICE BABY\x04\x04\x04\x04", BLOCK_SIZE).ok(),
            Some(b"ICE ICE BABY".to_vec())
        );
        assert_eq!(unpad(&[16u8; 16], BLOCK_SIZE).ok(), Some(Vec::new()));
    }
}
