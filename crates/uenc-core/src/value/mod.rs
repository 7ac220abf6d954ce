//! Dynamic value model for URL encoding.
//!
//! Callers hand the encoder an arbitrary value; scalars reduce to text and
//! percent-encode, while `Seq` and `Map` carry one level of structure that
//! only the query builder knows how to flatten.

mod json;
mod url_encoded;

pub use url_encoded::UrlEncoded;

use std::fmt;

use thiserror::Error;

use crate::component::encode_component;

/// A borrowed dynamic value accepted by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Flat sequence of scalars; meaningful only under a query key.
    Seq(Vec<Value<'a>>),
    /// Ordered key/value pairs; meaningful only at query top level.
    Map(Vec<(&'a str, Value<'a>)>),
}

/// Kind tag used in errors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    UInt,
    Float,
    Bool,
    Seq,
    Map,
    /// JSON `null` has no text form; it only ever appears in errors.
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::UInt => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Seq => "sequence",
            ValueKind::Map => "map",
            ValueKind::Null => "null",
        };
        write!(f, "{}", name)
    }
}

/// Error from encoding a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value cannot be reduced to text at this position.
    #[error("unsupported value kind: {kind} has no scalar text form")]
    UnsupportedValueKind { kind: ValueKind },
}

impl Value<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Text form of a scalar, before any percent-encoding. `None` for
    /// `Seq` and `Map`.
    pub(crate) fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some((*s).to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::UInt(u) => Some(u.to_string()),
            Value::Float(x) => Some(x.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Seq(_) | Value::Map(_) => None,
        }
    }
}

/// Encodes a single value as a URL component.
///
/// Scalars stringify (decimal integers, shortest-form floats, `true`/`false`)
/// and percent-encode. `Seq` and `Map` have no scalar text and fail with
/// [`EncodeError::UnsupportedValueKind`]; flattening composites is the query
/// builder's job, not this function's.
pub fn encode_value(value: &Value<'_>) -> Result<String, EncodeError> {
    match value.scalar_text() {
        Some(text) => Ok(encode_component(&text)),
        None => Err(EncodeError::UnsupportedValueKind { kind: value.kind() }),
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl From<i32> for Value<'_> {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value<'_> {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value<'_> {
    fn from(u: u32) -> Self {
        Value::UInt(u64::from(u))
    }
}

impl From<u64> for Value<'_> {
    fn from(u: u64) -> Self {
        Value::UInt(u)
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_encode() {
        assert_eq!(encode_value(&Value::Str("a b")).as_deref(), Ok("a%20b"));
        assert_eq!(encode_value(&Value::Int(-42)).as_deref(), Ok("-42"));
        assert_eq!(encode_value(&Value::UInt(7)).as_deref(), Ok("7"));
        assert_eq!(encode_value(&Value::Float(1.5)).as_deref(), Ok("1.5"));
        assert_eq!(encode_value(&Value::Bool(true)).as_deref(), Ok("true"));
    }

    #[test]
    fn float_uses_shortest_display_form() {
        assert_eq!(encode_value(&Value::Float(1.0)).as_deref(), Ok("1"));
    }

    #[test]
    fn composites_are_unsupported() {
        let seq = Value::Seq(vec![Value::Int(1)]);
        assert_eq!(
            encode_value(&seq),
            Err(EncodeError::UnsupportedValueKind {
                kind: ValueKind::Seq
            })
        );

        let map = Value::Map(vec![("k", Value::Int(1))]);
        assert_eq!(
            encode_value(&map),
            Err(EncodeError::UnsupportedValueKind {
                kind: ValueKind::Map
            })
        );
    }

    #[test]
    fn error_names_the_kind() {
        let err = encode_value(&Value::Seq(vec![])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported value kind: sequence has no scalar text form"
        );
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from("x"), Value::Str("x"));
        assert_eq!(Value::from(3_i32), Value::Int(3));
        assert_eq!(Value::from(3_u64), Value::UInt(3));
        assert_eq!(Value::from(false), Value::Bool(false));
    }
}
