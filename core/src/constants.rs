//! constants.rs
//! Format constants shared by the header codec, identifier chain and link builder.
//!
//! Everything here is part of the wire contract with other NXG implementations.
//! Changing any value breaks decoding or identifier parity.

/// Length of the raw header payload before base64 encoding.
pub const HEADER_RAW_LEN: usize = 21;

/// Length of the base64-standard encoded header (4 * ceil(21 / 3)).
pub const HEADER_LEN: usize = 28;

/// Separator between header fields and between hashed/encrypted fields.
pub const FIELD_SEPARATOR: char = ':';

/// Number of fields a decoded header must split into.
pub const HEADER_FIELD_COUNT: usize = 3;

/// Hex length of a SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// URI scheme prefix for shareable links.
pub const LINK_SCHEME: &str = "nxglnk://";

/// Query key carrying the header inside a link.
pub const LINK_HEADER_KEY: &str = "h";

/// Character offsets of a segment hash, `local@domain.tld`.
pub mod segment_id_slices {
    use std::ops::Range;

    pub const LOCAL: Range<usize> = 0..40;
    pub const DOMAIN: Range<usize> = 40..61;
    pub const TLD: Range<usize> = 61..64;
}

/// Character offsets of the poster hash, `name <local@domain.tld>`.
/// Name and local part deliberately overlap.
pub mod poster_slices {
    use std::ops::Range;

    pub const NAME: Range<usize> = 10..15;
    pub const LOCAL: Range<usize> = 10..25;
    pub const DOMAIN: Range<usize> = 30..45;
    pub const TLD: Range<usize> = 50..53;
}

/// Charsets for the seeded random text generator.
pub mod charsets {
    pub const ALPHANUMERIC: &[u8] =
        b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const ALPHABETIC: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
}
