//! crypto/kdf.rs
//! Metadata key derivation from a header.
//!
//! This is NOT a key derivation function. The 28 header bytes are copied
//! left-aligned into a zeroed 32-byte buffer and used directly as the AES-256
//! key, which is what existing NXG consumers expect.
//!
//! Security notes:
//! - Anyone holding the header text holds the key.
//! - Four key bytes are always zero and the rest are base64 characters, so the
//!   effective key space is far below 256 bits. Do not treat this as a secrecy
//!   boundary.

use crate::crypto::types::KEY_LEN_32;
use crate::headers::Header;

/// Zero-pad the header bytes into a 32-byte AES-256 key.
#[inline]
pub fn header_key_32(header: &Header) -> [u8; KEY_LEN_32] {
    let mut key = [0u8; KEY_LEN_32];
    let bytes = header.as_bytes();
    key[..bytes.len()].copy_from_slice(bytes);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HEADER_LEN;

    #[test]
    fn key_is_header_then_zero_padding() {
        let header = Header::parse("aGVsbG86NToxMGFiY2RlZmdoaWpr").unwrap();
        let key = header_key_32(&header);
        assert_eq!(&key[..HEADER_LEN], header.as_bytes());
        assert!(key[HEADER_LEN..].iter().all(|&b| b == 0));
    }
}
