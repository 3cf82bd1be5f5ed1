use rand::Rng;

use crate::constants::charsets::{ALPHABETIC, ALPHANUMERIC};
use crate::crypto::entropy::{ClockEntropy, EntropySource};

/// Random text drawn from the clock-seeded generator.
///
/// Not cryptographically secure. Two calls with the same `salt` inside the
/// same clock tick return the same text; pass distinct salts or use
/// [`random_text_with`] and `OsEntropy` when uniqueness matters.
pub fn random_text(length: usize, salt: u64, numeric: bool) -> String {
    random_text_with(&ClockEntropy, length, salt, numeric)
}

/// Random text of `length` ASCII characters, alphanumeric when `numeric`,
/// letters only otherwise.
pub fn random_text_with<E: EntropySource>(
    source: &E,
    length: usize,
    salt: u64,
    numeric: bool,
) -> String {
    let charset = if numeric { ALPHANUMERIC } else { ALPHABETIC };
    let mut rng = source.rng(salt);

    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}
