//! headers/types.rs
//! Header value type, its decoded view, and codec errors.
//!
//! Layout notes:
//! - Raw payload is 21 ASCII bytes: a random alphanumeric run whose tail is
//!   overwritten with `:<data_parts>:<par_parts>`.
//! - The header is the base64-standard encoding of that payload, always 28 bytes.
//! - The header text doubles as hash input and as AES key material, so its
//!   bytes are the contract, not the decoded view.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::constants::{HEADER_LEN, HEADER_RAW_LEN};

/// Fixed 28-byte encoded header. Compared and copied by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Header([u8; HEADER_LEN]);

impl Header {
    pub const LEN: usize = HEADER_LEN;

    /// Wrap already-encoded bytes. Callers guarantee base64 ASCII.
    #[inline]
    pub(crate) fn from_encoded(bytes: [u8; HEADER_LEN]) -> Self {
        Self(bytes)
    }

    /// Import header text received from elsewhere.
    ///
    /// Checks the length and that the text is valid base64-standard of a
    /// 21-byte payload. Field structure is not checked; use [`Header::decode`].
    pub fn parse(text: &str) -> Result<Self, HeaderError> {
        let bytes = text.as_bytes();
        if bytes.len() != HEADER_LEN {
            return Err(HeaderError::InvalidLength { have: bytes.len(), need: HEADER_LEN });
        }

        let raw = STANDARD.decode(bytes)?;
        if raw.len() != HEADER_RAW_LEN {
            return Err(HeaderError::InvalidLength { have: raw.len(), need: HEADER_RAW_LEN });
        }

        let mut out = [0u8; HEADER_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.0
    }

    /// Header text. ASCII by construction.
    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Header({:?})", self.as_str())
    }
}

impl FromStr for Header {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Header::parse(s)
    }
}

impl TryFrom<&str> for Header {
    type Error = HeaderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Header::parse(s)
    }
}

impl AsRef<[u8]> for Header {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Fields recovered from a header. Built only by decoding.
///
/// Counts are signed: headers from other producers may carry values that
/// `generate_header` would never write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedHeader {
    pub random_string: String,
    pub total_data_parts: i64,
    pub total_par_parts: i64,
}

/// Which count field failed to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartCountField {
    DataParts,
    ParParts,
}

impl fmt::Display for PartCountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartCountField::DataParts => f.write_str("total data parts"),
            PartCountField::ParParts => f.write_str("total par2 parts"),
        }
    }
}

#[derive(Debug)]
pub enum HeaderError {
    /// Header text is not valid base64-standard.
    Base64(base64::DecodeError),

    /// Decoded payload did not split into exactly three `:` fields.
    UnexpectedFormat { fields: usize, decoded: String },

    /// A part count field is not a base-10 integer.
    InvalidPartCount { field: PartCountField, source: ParseIntError },

    /// `:<data>:<par>` does not fit in the raw payload.
    PartCountsTooLarge { suffix_len: usize, max: usize },

    /// Header text or payload has the wrong length.
    InvalidLength { have: usize, need: usize },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            Base64(e) =>
                write!(f, "failed to decode base64 header: {}", e),
            UnexpectedFormat { fields, decoded } =>
                write!(f, "unexpected header format: {} fields in {:?}", fields, decoded),
            InvalidPartCount { field, source } =>
                write!(f, "failed to parse {}: {}", field, source),
            PartCountsTooLarge { suffix_len, max } =>
                write!(f, "part counts too large: suffix is {} bytes, payload holds {}", suffix_len, max),
            InvalidLength { have, need } =>
                write!(f, "invalid header length: {} != {}", have, need),
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::Base64(e) => Some(e),
            HeaderError::InvalidPartCount { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for HeaderError {
    fn from(e: base64::DecodeError) -> Self {
        HeaderError::Base64(e)
    }
}
