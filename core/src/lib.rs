//! nxg-core
//!
//! Header codec and obfuscated identifier derivation for split-content posting.
//! No network, no storage; every operation is a pure function of its arguments
//! apart from the randomness it draws.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod crypto;
pub mod headers;
pub mod segments;

pub mod link;
pub mod metadata;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{ClockEntropy, CryptoError, EntropySource, FixedEntropy, OsEntropy};
    pub use crate::headers::{decode_header, generate_header, DecodedHeader, Header, HeaderError};
    pub use crate::link::build_link;
    pub use crate::metadata::{decrypt_metadata, encrypt_metadata, FileMetadata};
    pub use crate::segments::{IdentifierError, PartDescriptor, PartIdentifiers, PartType};
    pub use crate::types::NxgError;
}
