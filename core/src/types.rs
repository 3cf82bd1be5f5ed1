use thiserror::Error;

use crate::crypto::CryptoError;
use crate::headers::HeaderError;
use crate::segments::IdentifierError;

/// Unified error covering header, identifier and metadata failures.
/// - `From<T>` impls let callers chain codec, derivation and encryption with `?`.
#[derive(Debug, Error)]
pub enum NxgError {
    /// Header codec error (base64, field count, part count parse).
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Identifier chain error (hash length invariant).
    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// Metadata encryption error (cipher setup, randomness, tag).
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
