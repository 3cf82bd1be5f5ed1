//! segments/derive.rs
//! Identifier chain for one part.
//!
//! ```text
//! segment_hash = sha256_hex("<header>:<part_type>:<part_number>")
//! segment_id   = segment_hash[0..40] @ segment_hash[40..61] . segment_hash[61..64]
//! subject      = sha256_hex(segment_hash)
//! poster_hash  = sha256_hex(subject)
//! poster       = p[10..15] <p[10..25]@p[30..45].p[50..53]>
//! ```
//!
//! Every slice offset assumes a 64-character digest, so the length is checked
//! once at the root of the chain.

use crate::constants::{poster_slices, segment_id_slices, FIELD_SEPARATOR, SHA256_HEX_LEN};
use crate::crypto::digest::sha256_hex;
use crate::headers::Header;
use crate::segments::types::{IdentifierError, PartDescriptor, PartType};

/// Root hash of the chain.
pub fn segment_hash(
    header: &Header,
    part_type: PartType,
    part_number: u64,
) -> Result<String, IdentifierError> {
    let text = format!(
        "{}{sep}{}{sep}{}",
        header,
        part_type,
        part_number,
        sep = FIELD_SEPARATOR
    );
    let hash = sha256_hex(&text);

    if hash.len() != SHA256_HEX_LEN {
        return Err(IdentifierError::UnexpectedHashLength {
            have: hash.len(),
            need: SHA256_HEX_LEN,
        });
    }

    Ok(hash)
}

/// Message-ID style locator, `local@domain.tld`.
pub fn generate_segment_id(
    header: &Header,
    part_type: PartType,
    part_number: u64,
) -> Result<String, IdentifierError> {
    let hash = segment_hash(header, part_type, part_number)?;
    Ok(segment_id_from_hash(&hash))
}

/// Double hash: SHA-256 of the segment hash.
pub fn obfuscated_subject(
    header: &Header,
    part_type: PartType,
    part_number: u64,
) -> Result<String, IdentifierError> {
    let hash = segment_hash(header, part_type, part_number)?;
    Ok(sha256_hex(&hash))
}

/// Triple hash sliced into `name <local@domain.tld>`.
pub fn obfuscated_poster(
    header: &Header,
    part_type: PartType,
    part_number: u64,
) -> Result<String, IdentifierError> {
    let subject = obfuscated_subject(header, part_type, part_number)?;
    Ok(poster_from_subject(&subject))
}

fn segment_id_from_hash(hash: &str) -> String {
    format!(
        "{}@{}.{}",
        &hash[segment_id_slices::LOCAL],
        &hash[segment_id_slices::DOMAIN],
        &hash[segment_id_slices::TLD]
    )
}

fn poster_from_subject(subject: &str) -> String {
    let p = sha256_hex(subject);
    format!(
        "{} <{}@{}.{}>",
        &p[poster_slices::NAME],
        &p[poster_slices::LOCAL],
        &p[poster_slices::DOMAIN],
        &p[poster_slices::TLD]
    )
}

impl Header {
    pub fn segment_hash(&self, part_type: PartType, part_number: u64) -> Result<String, IdentifierError> {
        segment_hash(self, part_type, part_number)
    }

    pub fn generate_segment_id(&self, part_type: PartType, part_number: u64) -> Result<String, IdentifierError> {
        generate_segment_id(self, part_type, part_number)
    }

    pub fn obfuscated_subject(&self, part_type: PartType, part_number: u64) -> Result<String, IdentifierError> {
        obfuscated_subject(self, part_type, part_number)
    }

    pub fn obfuscated_poster(&self, part_type: PartType, part_number: u64) -> Result<String, IdentifierError> {
        obfuscated_poster(self, part_type, part_number)
    }

    /// All three identifiers for one part.
    pub fn part_identifiers(&self, part: PartDescriptor) -> Result<PartIdentifiers, IdentifierError> {
        PartIdentifiers::derive(self, part)
    }
}

/// Segment ID, subject and poster for one part, computed from a single root hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartIdentifiers {
    pub segment_id: String,
    pub subject: String,
    pub poster: String,
}

impl PartIdentifiers {
    pub fn derive(header: &Header, part: PartDescriptor) -> Result<Self, IdentifierError> {
        let hash = segment_hash(header, part.part_type, part.part_number)?;
        let subject = sha256_hex(&hash);

        Ok(Self {
            segment_id: segment_id_from_hash(&hash),
            poster: poster_from_subject(&subject),
            subject,
        })
    }
}
