//! headers/mod.rs
//! Public module export for the NXG header codec.
//!
//! Notes:
//! - Fixed-size 28-byte header enables simple embedding in protocol fields and filenames.
//! - The encoded bytes are authoritative: identifiers and the metadata key are
//!   derived from the header text, never from the decoded view.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
