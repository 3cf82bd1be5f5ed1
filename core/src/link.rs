//! link.rs
//! Shareable `nxglnk://` links.
//!
//! The header is inserted verbatim (base64 `+`, `/` and `=` are not escaped);
//! resolvers read `h` as raw text. The remaining query keeps only
//! `A-Z a-z 0-9 - _ . ~` literal, turns space into `+` and percent-escapes
//! everything else. Keys are in byte order and multi-valued keys are repeated
//! in their given order.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::{LINK_HEADER_KEY, LINK_SCHEME};
use crate::headers::Header;

/// Everything except the RFC 3986 unreserved set.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape one key or value; space becomes `+`.
pub fn query_escape(text: &str) -> String {
    text.split(' ')
        .map(|chunk| utf8_percent_encode(chunk, QUERY_ESCAPE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Build `nxglnk://?h=<header>&<query>`.
///
/// The `&` separator is always present, even for an empty query.
pub fn build_link<I, K, Vs, V>(header: &Header, query: I) -> String
where
    I: IntoIterator<Item = (K, Vs)>,
    K: AsRef<str>,
    Vs: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    let mut entries: Vec<(K, Vs)> = query.into_iter().collect();
    entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    let mut pairs = Vec::new();
    for (key, values) in entries {
        let key = query_escape(key.as_ref());
        for value in values {
            pairs.push(format!("{}={}", key, query_escape(value.as_ref())));
        }
    }

    format!(
        "{}?{}={}&{}",
        LINK_SCHEME,
        LINK_HEADER_KEY,
        header,
        pairs.join("&")
    )
}

impl Header {
    /// See [`build_link`].
    pub fn link<I, K, Vs, V>(&self, query: I) -> String
    where
        I: IntoIterator<Item = (K, Vs)>,
        K: AsRef<str>,
        Vs: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        build_link(self, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Header {
        Header::parse("aGVsbG86NToxMGFiY2RlZmdoaWpr").unwrap()
    }

    #[test]
    fn empty_query_keeps_separator() {
        let link = build_link(&header(), Vec::<(&str, Vec<&str>)>::new());
        assert_eq!(link, "nxglnk://?h=aGVsbG86NToxMGFiY2RlZmdoaWpr&");
    }

    #[test]
    fn keys_are_sorted() {
        let link = build_link(&header(), vec![("z", vec!["1"]), ("a", vec!["2"])]);
        assert!(link.ends_with("&a=2&z=1"));
    }

    #[test]
    fn values_are_form_escaped() {
        let link = build_link(&header(), vec![("name", vec!["my file&co.bin"])]);
        assert!(link.ends_with("&name=my+file%26co.bin"));
    }

    #[test]
    fn star_is_escaped_and_tilde_is_kept() {
        let link = build_link(&header(), [("q", ["a*b~c"])]);
        assert!(link.ends_with("&q=a%2Ab~c"), "got {link}");
    }

    #[test]
    fn escape_matches_unreserved_set() {
        assert_eq!(query_escape("AZaz09-_.~"), "AZaz09-_.~");
        assert_eq!(query_escape("a b!'()*"), "a+b%21%27%28%29%2A");
        assert_eq!(query_escape("é"), "%C3%A9");
    }
}
