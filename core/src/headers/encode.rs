//! src/headers/encode.rs
//!
//! Header generation.
//!
//! Design notes:
//! - 21 random alphanumeric bytes, tail overwritten right-aligned with
//!   `:<data_parts>:<par_parts>`, then base64-standard encoded into 28 bytes.
//! - Counts whose suffix exceeds 21 bytes are rejected rather than allowed to
//!   eat into each other. A suffix of exactly 21 bytes leaves an empty random run.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::constants::{FIELD_SEPARATOR, HEADER_LEN, HEADER_RAW_LEN};
use crate::crypto::entropy::{ClockEntropy, EntropySource};
use crate::headers::types::{Header, HeaderError};
use crate::utils::random_text_with;

/// Generate a header for `total_data_parts` data and `total_par_parts` parity parts.
///
/// Uses the clock-seeded generator for the random run.
pub fn generate_header(total_data_parts: u64, total_par_parts: u64) -> Result<Header, HeaderError> {
    generate_header_with(&ClockEntropy, total_data_parts, total_par_parts)
}

/// Same as [`generate_header`] with an explicit entropy source.
pub fn generate_header_with<E: EntropySource>(
    source: &E,
    total_data_parts: u64,
    total_par_parts: u64,
) -> Result<Header, HeaderError> {
    let suffix = format!(
        "{sep}{}{sep}{}",
        total_data_parts,
        total_par_parts,
        sep = FIELD_SEPARATOR
    );
    if suffix.len() > HEADER_RAW_LEN {
        tracing::debug!(
            total_data_parts,
            total_par_parts,
            suffix_len = suffix.len(),
            "rejecting header generation: part counts overflow payload"
        );
        return Err(HeaderError::PartCountsTooLarge {
            suffix_len: suffix.len(),
            max: HEADER_RAW_LEN,
        });
    }

    let prefix = random_text_with(source, HEADER_RAW_LEN, 0, true);
    let mut raw = [0u8; HEADER_RAW_LEN];
    raw.copy_from_slice(prefix.as_bytes());
    raw[HEADER_RAW_LEN - suffix.len()..].copy_from_slice(suffix.as_bytes());

    // 21 raw bytes always encode to exactly 28 base64 bytes.
    let encoded = STANDARD.encode(raw);
    debug_assert_eq!(encoded.len(), HEADER_LEN, "encoding wrote incorrect length");
    let mut out = [0u8; HEADER_LEN];
    out.copy_from_slice(encoded.as_bytes());

    tracing::trace!(total_data_parts, total_par_parts, "generated header");
    Ok(Header::from_encoded(out))
}

impl Header {
    /// See [`generate_header`].
    pub fn generate(total_data_parts: u64, total_par_parts: u64) -> Result<Self, HeaderError> {
        generate_header(total_data_parts, total_par_parts)
    }

    /// See [`generate_header_with`].
    pub fn generate_with<E: EntropySource>(
        source: &E,
        total_data_parts: u64,
        total_par_parts: u64,
    ) -> Result<Self, HeaderError> {
        generate_header_with(source, total_data_parts, total_par_parts)
    }
}
