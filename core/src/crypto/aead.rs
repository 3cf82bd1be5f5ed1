//! src/crypto/aead.rs
//! AES-256-GCM sealing for the metadata header field.
//!
//! Design notes:
//! - 32-byte key (see `kdf::header_key_32`), 12-byte random nonce per seal.
//! - Sealed layout is `nonce || ciphertext || tag`, no AAD.
//! - Tag verification must fail closed (no partial plaintext).

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12, TAG_LEN};

/// AES-256-GCM cipher bound to one key.
#[derive(Clone)]
pub struct MetadataCipher {
    cipher: Aes256Gcm,
}

impl MetadataCipher {
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: key.len(),
            });
        }

        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        Ok(Self { cipher })
    }

    /// Seal under a fresh OS-random nonce and return `nonce || ciphertext || tag`.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut nonce = [0u8; NONCE_LEN_12];
        OsRng.try_fill_bytes(&mut nonce)?;
        self.seal_with_nonce(&nonce, plaintext)
    }

    /// Seal under a caller-provided nonce. Never reuse a nonce with the same key.
    pub fn seal_with_nonce(
        &self,
        nonce_12: &[u8; NONCE_LEN_12],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let ct = self
            .cipher
            .encrypt(Nonce::from_slice(nonce_12), Payload { msg: plaintext, aad: &[] })
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))?;

        let mut out = Vec::with_capacity(NONCE_LEN_12 + ct.len());
        out.extend_from_slice(nonce_12);
        out.extend_from_slice(&ct);
        Ok(out)
    }

    /// Open a `nonce || ciphertext || tag` blob.
    pub fn open(&self, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let need = NONCE_LEN_12 + TAG_LEN;
        if sealed.len() < need {
            return Err(CryptoError::CiphertextTooShort { have: sealed.len(), need });
        }

        let (nonce, ciphertext_and_tag) = sealed.split_at(NONCE_LEN_12);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext_and_tag, aad: &[] })
            .map_err(|_| CryptoError::TagMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_key() {
        assert!(matches!(
            MetadataCipher::new(&[0u8; 16]),
            Err(CryptoError::InvalidKeyLen { expected: 32, actual: 16 })
        ));
    }

    #[test]
    fn seal_open_with_fixed_nonce() {
        let cipher = MetadataCipher::new(&[7u8; KEY_LEN_32]).unwrap();
        let sealed = cipher.seal_with_nonce(&[1u8; NONCE_LEN_12], b"payload").unwrap();
        assert_eq!(&sealed[..NONCE_LEN_12], &[1u8; NONCE_LEN_12]);
        assert_eq!(sealed.len(), NONCE_LEN_12 + 7 + TAG_LEN);
        assert_eq!(cipher.open(&sealed).unwrap(), b"payload");
    }

    #[test]
    fn tampered_tag_fails_closed() {
        let cipher = MetadataCipher::new(&[7u8; KEY_LEN_32]).unwrap();
        let mut sealed = cipher.seal(b"payload").unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        assert!(matches!(cipher.open(&sealed), Err(CryptoError::TagMismatch)));
    }

    #[test]
    fn open_rejects_truncated_blob() {
        let cipher = MetadataCipher::new(&[7u8; KEY_LEN_32]).unwrap();
        assert!(matches!(
            cipher.open(&[0u8; 20]),
            Err(CryptoError::CiphertextTooShort { have: 20, need: 28 })
        ));
    }
}
