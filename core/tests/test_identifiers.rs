use nxg_core::crypto::{sha256_hex, FixedEntropy};
use nxg_core::headers::Header;
use nxg_core::segments::{
    generate_segment_id, obfuscated_poster, obfuscated_subject, segment_hash, PartDescriptor, PartType,
};

fn fixed_header() -> Header {
    Header::generate_with(&FixedEntropy(0xA5), 5, 10).unwrap()
}

#[test]
fn identifiers_are_repeatable() {
    let h = fixed_header();
    for (part_type, n) in [(PartType::Data, 3), (PartType::Par2, 0)] {
        assert_eq!(h.generate_segment_id(part_type, n).unwrap(), h.generate_segment_id(part_type, n).unwrap());
        assert_eq!(h.obfuscated_subject(part_type, n).unwrap(), h.obfuscated_subject(part_type, n).unwrap());
        assert_eq!(h.obfuscated_poster(part_type, n).unwrap(), h.obfuscated_poster(part_type, n).unwrap());
    }
}

#[test]
fn part_number_changes_every_identifier() {
    let h = fixed_header();
    let a = h.part_identifiers(PartDescriptor::data(1)).unwrap();
    let b = h.part_identifiers(PartDescriptor::data(2)).unwrap();
    assert_ne!(a.segment_id, b.segment_id);
    assert_ne!(a.subject, b.subject);
    assert_ne!(a.poster, b.poster);
}

#[test]
fn part_type_changes_segment_id() {
    let h = fixed_header();
    assert_ne!(
        generate_segment_id(&h, PartType::Data, 1).unwrap(),
        generate_segment_id(&h, PartType::Par2, 1).unwrap()
    );
}

#[test]
fn header_changes_segment_id() {
    let a = Header::generate_with(&FixedEntropy(1), 5, 10).unwrap();
    let b = Header::generate_with(&FixedEntropy(2), 5, 10).unwrap();
    assert_ne!(a, b);
    assert_ne!(
        generate_segment_id(&a, PartType::Data, 1).unwrap(),
        generate_segment_id(&b, PartType::Data, 1).unwrap()
    );
}

#[test]
fn segment_id_slices_the_segment_hash() {
    let h = fixed_header();
    let hash = segment_hash(&h, PartType::Data, 9).unwrap();
    let id = generate_segment_id(&h, PartType::Data, 9).unwrap();
    assert_eq!(id, format!("{}@{}.{}", &hash[..40], &hash[40..61], &hash[61..]));
}

#[test]
fn subject_is_double_hash() {
    let h = fixed_header();
    let hash = segment_hash(&h, PartType::Par2, 4).unwrap();
    let subject = obfuscated_subject(&h, PartType::Par2, 4).unwrap();
    assert_eq!(subject, sha256_hex(&hash));
    assert_eq!(subject.len(), 64);
    assert!(subject.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn poster_is_sliced_triple_hash() {
    let h = fixed_header();
    let subject = obfuscated_subject(&h, PartType::Data, 12).unwrap();
    let p = sha256_hex(&subject);
    let poster = obfuscated_poster(&h, PartType::Data, 12).unwrap();
    assert_eq!(poster, format!("{} <{}@{}.{}>", &p[10..15], &p[10..25], &p[30..45], &p[50..53]));
}

#[test]
fn poster_shape() {
    let poster = fixed_header().obfuscated_poster(PartType::Data, 1).unwrap();
    let (name, addr) = poster.split_once(' ').unwrap();
    assert_eq!(name.len(), 5);
    assert!(addr.starts_with('<') && addr.ends_with('>'));
    let (local, rest) = addr[1..addr.len() - 1].split_once('@').unwrap();
    let (domain, tld) = rest.split_once('.').unwrap();
    assert_eq!((local.len(), domain.len(), tld.len()), (15, 15, 3));
    assert!(local.starts_with(name));
}

#[test]
fn part_type_text_is_stable() {
    assert_eq!(PartType::Data.to_string(), "data");
    assert_eq!(PartType::Par2.to_string(), "par2");
    assert_eq!("par2".parse::<PartType>().unwrap(), PartType::Par2);
    assert!("parity".parse::<PartType>().is_err());
}
