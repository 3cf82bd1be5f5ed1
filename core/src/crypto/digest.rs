//! crypto/digest.rs
//! SHA-256 helpers for the identifier chain.

use sha2::{Digest as _, Sha256};

/// Lowercase hex SHA-256 of `text`. Always 64 characters.
#[inline]
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_input_is_64_chars() {
        assert_eq!(sha256_hex("").len(), 64);
    }
}
