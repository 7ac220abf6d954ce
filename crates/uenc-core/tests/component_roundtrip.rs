//! Codec properties end to end, including a differential check against the
//! percent-encoding crate as reference implementation.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use uenc_core::component::{decode_component, decode_component_lossy, encode_component};
use uenc_core::query::{parse_query, QueryPairs};

/// Everything except ASCII alphanumerics and `- _ . ~`: the strict component
/// set this crate implements.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const CORPUS: &[&str] = &[
    "",
    "abc",
    "a b",
    "a/b?c=d",
    "100% sure",
    "café",
    "日本語",
    "snowman ☃",
    "tab\tand\nnewline",
    "crab 🦀",
    "~user/.profile-1_2",
    "a&b=c;d",
    "%2F already encoded",
    "trailing space ",
    " leading",
];

#[test]
fn encode_matches_reference_implementation() {
    for input in CORPUS {
        let ours = encode_component(input);
        let reference = utf8_percent_encode(input, COMPONENT).to_string();
        assert_eq!(ours, reference, "input {:?}", input);
    }
}

#[test]
fn decode_inverts_encode() {
    for input in CORPUS {
        let encoded = encode_component(input);
        assert_eq!(
            decode_component(&encoded).as_deref(),
            Ok(*input),
            "input {:?}",
            input
        );
    }
}

#[test]
fn lossy_decode_agrees_on_well_formed_input() {
    for input in CORPUS {
        let encoded = encode_component(input);
        assert_eq!(decode_component_lossy(&encoded), *input, "input {:?}", input);
    }
}

#[test]
fn encoded_output_is_ascii_and_bounded() {
    for input in CORPUS {
        let encoded = encode_component(input);
        assert!(encoded.is_ascii(), "input {:?}", input);
        assert!(encoded.len() <= 3 * input.len(), "input {:?}", input);
    }
}

#[test]
fn query_roundtrip_preserves_pairs() {
    let mut pairs = QueryPairs::new();
    pairs.push_str("q", "rust url encoding");
    pairs.push_str("lang", "日本語");
    pairs.push_str("empty", "");
    pairs.push_str("sym&bol", "a=b&c");
    pairs.push_str("q", "repeated key");

    let encoded = pairs.encode();
    let parsed = parse_query(&encoded).unwrap();
    assert_eq!(parsed, pairs);
}
