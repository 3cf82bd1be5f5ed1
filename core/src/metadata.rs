//! metadata.rs
//! Encrypted metadata carried in the outbound `X-Nxg` header field.
//!
//! Design notes:
//! - Plaintext is the fields joined with `:`. Field values are not escaped, so
//!   only the filename (which sits between fixed-shape fields) may contain `:`.
//! - Key is the zero-padded header (`crypto::kdf::header_key_32`).
//! - Output is lowercase `hex(nonce || ciphertext || tag)` and differs on every call.

use serde::{Deserialize, Serialize};

use crate::constants::FIELD_SEPARATOR;
use crate::crypto::aead::MetadataCipher;
use crate::crypto::kdf::header_key_32;
use crate::crypto::types::CryptoError;
use crate::headers::Header;
use crate::segments::PartType;

/// Join `fields` with `:` and seal them under the header-derived key.
pub fn encrypt_metadata<S: AsRef<str>>(header: &Header, fields: &[S]) -> Result<String, CryptoError> {
    let plaintext = join_fields(fields);
    let cipher = MetadataCipher::new(&header_key_32(header))?;
    let sealed = cipher.seal(plaintext.as_bytes())?;

    tracing::trace!(plaintext_len = plaintext.len(), sealed_len = sealed.len(), "sealed metadata");
    Ok(hex::encode(sealed))
}

/// Inverse of [`encrypt_metadata`]. Returns the joined plaintext.
pub fn decrypt_metadata(header: &Header, sealed_hex: &str) -> Result<String, CryptoError> {
    let sealed = hex::decode(sealed_hex)?;
    let cipher = MetadataCipher::new(&header_key_32(header))?;
    let plaintext = cipher.open(&sealed)?;

    String::from_utf8(plaintext)
        .map_err(|_| CryptoError::Format("metadata plaintext is not UTF-8".into()))
}

fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(field.as_ref());
    }
    out
}

/// File-level metadata for one posted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub file_number: u64,
    pub total_files: u64,
    pub filename: String,
    pub part_type: PartType,
    pub total_download_size: u64,
}

impl FileMetadata {
    /// Field order on the wire.
    pub fn to_fields(&self) -> [String; 5] {
        [
            self.file_number.to_string(),
            self.total_files.to_string(),
            self.filename.clone(),
            self.part_type.to_string(),
            self.total_download_size.to_string(),
        ]
    }

    pub fn encrypt(&self, header: &Header) -> Result<String, CryptoError> {
        encrypt_metadata(header, &self.to_fields())
    }

    pub fn decrypt(header: &Header, sealed_hex: &str) -> Result<Self, CryptoError> {
        let plaintext = decrypt_metadata(header, sealed_hex)?;
        Self::parse(&plaintext)
    }

    /// Parse `file_number:total_files:filename:part_type:total_download_size`.
    pub fn parse(plaintext: &str) -> Result<Self, CryptoError> {
        let malformed = || CryptoError::Format(format!("expected 5 fields in {:?}", plaintext));

        let mut head = plaintext.splitn(3, FIELD_SEPARATOR);
        let file_number = head.next().ok_or_else(malformed)?;
        let total_files = head.next().ok_or_else(malformed)?;
        let rest = head.next().ok_or_else(malformed)?;

        let mut tail = rest.rsplitn(3, FIELD_SEPARATOR);
        let total_download_size = tail.next().ok_or_else(malformed)?;
        let part_type = tail.next().ok_or_else(malformed)?;
        let filename = tail.next().ok_or_else(malformed)?;

        let number = |name: &str, raw: &str| {
            raw.parse::<u64>()
                .map_err(|e| CryptoError::Format(format!("{}: {}", name, e)))
        };

        Ok(Self {
            file_number: number("file_number", file_number)?,
            total_files: number("total_files", total_files)?,
            filename: filename.to_string(),
            part_type: part_type
                .parse()
                .map_err(|e| CryptoError::Format(format!("part_type: {}", e)))?,
            total_download_size: number("total_download_size", total_download_size)?,
        })
    }
}

impl Header {
    /// Encrypted value for the outbound `X-Nxg` header field.
    pub fn x_nxg_header(&self, metadata: &FileMetadata) -> Result<String, CryptoError> {
        metadata.encrypt(self)
    }

    pub fn encrypt_metadata<S: AsRef<str>>(&self, fields: &[S]) -> Result<String, CryptoError> {
        encrypt_metadata(self, fields)
    }

    pub fn decrypt_metadata(&self, sealed_hex: &str) -> Result<String, CryptoError> {
        decrypt_metadata(self, sealed_hex)
    }
}
