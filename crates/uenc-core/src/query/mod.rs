//! Query-string composition and parsing.
//!
//! Builds `k=v&k=v` strings with strict component encoding on both sides of
//! `=` (space is `%20`, never `+`), and parses such strings back into raw
//! pairs. Pair order is preserved in both directions.

mod parse;

pub use parse::parse_query;

use crate::component::encode_component;
use crate::value::{EncodeError, Value};

/// Ordered list of raw (unencoded) query key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Raw pairs, in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Appends a raw string pair. Nothing is encoded until [`encode`].
    ///
    /// [`encode`]: QueryPairs::encode
    pub fn push_str(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Appends a value under `key`.
    ///
    /// A scalar appends one pair. A `Seq` of scalars appends one pair per
    /// element under the repeated key, preserving element order. `Map` and
    /// nested `Seq` cannot be reduced to pairs and fail with
    /// `UnsupportedValueKind`.
    pub fn push(&mut self, key: &str, value: &Value<'_>) -> Result<(), EncodeError> {
        match value {
            Value::Seq(items) => {
                for item in items {
                    match item.scalar_text() {
                        Some(text) => self.pairs.push((key.to_string(), text)),
                        None => {
                            return Err(EncodeError::UnsupportedValueKind { kind: item.kind() })
                        }
                    }
                }
                Ok(())
            }
            other => match other.scalar_text() {
                Some(text) => {
                    self.pairs.push((key.to_string(), text));
                    Ok(())
                }
                None => Err(EncodeError::UnsupportedValueKind { kind: other.kind() }),
            },
        }
    }

    /// Builds pairs from a top-level `Map` value.
    pub fn from_value(value: &Value<'_>) -> Result<Self, EncodeError> {
        match value {
            Value::Map(entries) => {
                let mut pairs = Self::new();
                for (key, entry) in entries {
                    pairs.push(key, entry)?;
                }
                Ok(pairs)
            }
            other => Err(EncodeError::UnsupportedValueKind { kind: other.kind() }),
        }
    }

    /// Encodes as `k=v` pairs joined with `&`, both sides through
    /// `encode_component`. An empty pair list encodes to `""`.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(key));
            out.push('=');
            out.push_str(&encode_component(value));
        }
        out
    }
}
