use nxg_core::crypto::{sha256_hex, ClockEntropy, FixedEntropy, OsEntropy};
use nxg_core::utils::{random_text, random_text_with};

#[test]
fn sha256_hex_known_vectors() {
    assert_eq!(
        sha256_hex(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        sha256_hex("hello"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn random_text_respects_charset() {
    let numeric = random_text(256, 1, true);
    assert_eq!(numeric.len(), 256);
    assert!(numeric.bytes().all(|b| b.is_ascii_alphanumeric()));

    let letters = random_text_with(&ClockEntropy, 256, 1, false);
    assert!(letters.bytes().all(|b| b.is_ascii_alphabetic()));
}

#[test]
fn fixed_entropy_is_injectable() {
    let a = random_text_with(&FixedEntropy(11), 32, 0, true);
    let b = random_text_with(&FixedEntropy(11), 32, 0, true);
    let c = random_text_with(&FixedEntropy(11), 32, 1, true);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn os_entropy_draws_differ() {
    let a = random_text_with(&OsEntropy, 32, 0, true);
    let b = random_text_with(&OsEntropy, 32, 0, true);
    assert_ne!(a, b);
}

#[test]
fn concurrent_generation() {
    let handles: Vec<_> = (0..8u64)
        .map(|salt| std::thread::spawn(move || random_text(21, salt, true)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 21);
    }
}
