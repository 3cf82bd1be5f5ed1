//! src/headers/decode.rs
//!
//! Header decoding.
//!
//! Failure order is fixed: base64, then field count, then the data count, then
//! the par2 count. The first failure is returned.
//!
//! Fields are split on raw bytes, so a random run that is not UTF-8 still
//! decodes; it is returned with replacement characters. Counts are signed
//! base-10 integers, so `-5` and `+5` are accepted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::constants::FIELD_SEPARATOR;
use crate::headers::types::{DecodedHeader, Header, HeaderError, PartCountField};

/// Decode base64 header text into its random run and part counts.
pub fn decode_header(encoded: &str) -> Result<DecodedHeader, HeaderError> {
    let raw = STANDARD.decode(encoded).map_err(|e| {
        tracing::debug!(error = %e, "header is not valid base64");
        HeaderError::Base64(e)
    })?;

    let separator = FIELD_SEPARATOR as u8;
    let fields: Vec<&[u8]> = raw.split(|&b| b == separator).collect();
    let [random_string, data_parts, par_parts] = fields[..] else {
        return Err(HeaderError::UnexpectedFormat {
            fields: fields.len(),
            decoded: String::from_utf8_lossy(&raw).into_owned(),
        });
    };

    let total_data_parts = parse_count(data_parts, PartCountField::DataParts)?;
    let total_par_parts = parse_count(par_parts, PartCountField::ParParts)?;

    Ok(DecodedHeader {
        random_string: String::from_utf8_lossy(random_string).into_owned(),
        total_data_parts,
        total_par_parts,
    })
}

// Non-UTF-8 bytes become U+FFFD and fail as an invalid digit.
fn parse_count(raw: &[u8], field: PartCountField) -> Result<i64, HeaderError> {
    String::from_utf8_lossy(raw)
        .parse::<i64>()
        .map_err(|source| HeaderError::InvalidPartCount { field, source })
}

impl Header {
    /// Decode this header's own text.
    pub fn decode(&self) -> Result<DecodedHeader, HeaderError> {
        decode_header(self.as_str())
    }
}
