//! Query-string parsing back into raw pairs.

use crate::component::{decode_component, DecodeError};

use super::QueryPairs;

/// Parses `k=v&k=v` into raw pairs, strictly decoding both sides.
///
/// A fragment without `=` becomes a pair with an empty value. The empty
/// string parses to no pairs. Error positions are relative to the fragment
/// being decoded, not the whole input.
pub fn parse_query(input: &str) -> Result<QueryPairs, DecodeError> {
    let mut pairs = QueryPairs::new();
    if input.is_empty() {
        return Ok(pairs);
    }
    for fragment in input.split('&') {
        let (raw_key, raw_value) = match fragment.split_once('=') {
            Some((key, value)) => (key, value),
            None => (fragment, ""),
        };
        let key = decode_component(raw_key)?;
        let value = decode_component(raw_value)?;
        pairs.push_str(&key, &value);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &QueryPairs) -> Vec<(&str, &str)> {
        pairs
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn parse_basic() {
        let pairs = parse_query("q=a%20b&page=2").unwrap();
        assert_eq!(raw(&pairs), vec![("q", "a b"), ("page", "2")]);
    }

    #[test]
    fn parse_empty_is_no_pairs() {
        assert!(parse_query("").unwrap().is_empty());
    }

    #[test]
    fn missing_equals_means_empty_value() {
        let pairs = parse_query("flag&x=1").unwrap();
        assert_eq!(raw(&pairs), vec![("flag", ""), ("x", "1")]);
    }

    #[test]
    fn value_keeps_later_equals() {
        let pairs = parse_query("k=a=b").unwrap();
        assert_eq!(raw(&pairs), vec![("k", "a=b")]);
    }

    #[test]
    fn malformed_escape_is_error() {
        assert_eq!(
            parse_query("k=%2"),
            Err(DecodeError::InvalidEscape { position: 0 })
        );
    }

    #[test]
    fn order_is_preserved() {
        let pairs = parse_query("z=1&a=2&z=3").unwrap();
        assert_eq!(raw(&pairs), vec![("z", "1"), ("a", "2"), ("z", "3")]);
    }
}
