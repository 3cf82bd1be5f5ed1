//! segments/mod.rs
//! Deterministic per-part identifiers derived from a header.

pub mod types;
pub mod derive;

pub use types::*;
pub use derive::*;
