use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a part carries original content or parity data.
///
/// The textual form is hashed into every identifier and must stay stable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Data,
    Par2,
}

impl PartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Data => "data",
            PartType::Par2 => "par2",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartType {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(PartType::Data),
            "par2" => Ok(PartType::Par2),
            other => Err(IdentifierError::UnknownPartType(other.to_string())),
        }
    }
}

/// One part of the split content, addressed by type and number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartDescriptor {
    pub part_type: PartType,
    pub part_number: u64,
}

impl PartDescriptor {
    pub fn data(part_number: u64) -> Self {
        Self { part_type: PartType::Data, part_number }
    }

    pub fn par2(part_number: u64) -> Self {
        Self { part_type: PartType::Par2, part_number }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Segment hash is not the expected number of hex characters.
    UnexpectedHashLength { have: usize, need: usize },

    /// Text is neither `data` nor `par2`.
    UnknownPartType(String),
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::UnexpectedHashLength { have, need } =>
                write!(f, "unexpected hash length: {} != {}", have, need),
            IdentifierError::UnknownPartType(raw) =>
                write!(f, "unknown part type: {:?}", raw),
        }
    }
}

impl std::error::Error for IdentifierError {}
