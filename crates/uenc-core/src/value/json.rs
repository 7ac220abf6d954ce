//! Adapting parsed JSON into the value model.

use serde_json::Value as Json;

use super::{EncodeError, Value, ValueKind};

impl<'a> Value<'a> {
    /// Converts parsed JSON into a [`Value`], borrowing strings.
    ///
    /// Strings, numbers, and bools map to scalars; a top-level array maps to
    /// `Seq`, a top-level object to `Map` whose values may be scalars or
    /// flat arrays of scalars. `null` and any deeper nesting fail with
    /// `UnsupportedValueKind` rather than being silently stringified.
    pub fn from_json(json: &'a Json) -> Result<Value<'a>, EncodeError> {
        match json {
            Json::Array(items) => Ok(Value::Seq(
                items
                    .iter()
                    .map(Self::scalar_from_json)
                    .collect::<Result<_, _>>()?,
            )),
            Json::Object(entries) => {
                let mut map = Vec::with_capacity(entries.len());
                for (key, entry) in entries {
                    let value = match entry {
                        Json::Array(items) => Value::Seq(
                            items
                                .iter()
                                .map(Self::scalar_from_json)
                                .collect::<Result<_, _>>()?,
                        ),
                        other => Self::scalar_from_json(other)?,
                    };
                    map.push((key.as_str(), value));
                }
                Ok(Value::Map(map))
            }
            other => Self::scalar_from_json(other),
        }
    }

    fn scalar_from_json(json: &'a Json) -> Result<Value<'a>, EncodeError> {
        match json {
            Json::String(s) => Ok(Value::Str(s)),
            Json::Bool(b) => Ok(Value::Bool(*b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::UInt(u))
                } else if let Some(x) = n.as_f64() {
                    Ok(Value::Float(x))
                } else {
                    // Arbitrary-precision numbers with no f64 form.
                    Err(EncodeError::UnsupportedValueKind {
                        kind: ValueKind::Float,
                    })
                }
            }
            Json::Null => Err(EncodeError::UnsupportedValueKind {
                kind: ValueKind::Null,
            }),
            Json::Array(_) => Err(EncodeError::UnsupportedValueKind {
                kind: ValueKind::Seq,
            }),
            Json::Object(_) => Err(EncodeError::UnsupportedValueKind {
                kind: ValueKind::Map,
            }),
        }
    }
}
