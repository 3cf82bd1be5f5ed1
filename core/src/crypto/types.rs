use std::fmt;

/// AES-256 key length.
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte (96-bit) nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Sealed blob shorter than nonce + tag.
    CiphertextTooShort { have: usize, need: usize },

    /// Sealed blob is not valid hex.
    InvalidHex(hex::FromHexError),

    /// OS randomness source failed while drawing a nonce.
    Randomness(String),

    /// AEAD tag mismatch (authentication failure).
    TagMismatch,

    /// Decrypted metadata does not have the expected shape.
    Format(String),

    /// General cipher runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            CiphertextTooShort { have, need } =>
                write!(f, "ciphertext too short: {} < {}", have, need),
            InvalidHex(e) =>
                write!(f, "invalid hex ciphertext: {}", e),
            Randomness(msg) =>
                write!(f, "nonce generation failed: {}", msg),
            TagMismatch =>
                write!(f, "AEAD tag mismatch"),
            Format(msg) =>
                write!(f, "malformed metadata: {}", msg),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CryptoError::InvalidHex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(e: hex::FromHexError) -> Self {
        CryptoError::InvalidHex(e)
    }
}

impl From<rand::Error> for CryptoError {
    fn from(e: rand::Error) -> Self {
        CryptoError::Randomness(e.to_string())
    }
}
