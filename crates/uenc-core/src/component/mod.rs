//! Strict percent-encoding and decoding of URL components.
//!
//! Encodes per RFC 3986 component rules: every byte outside the unreserved
//! set becomes `%XX` with uppercase hex, and space becomes `%20` (never `+`).
//! Decoding is the exact inverse, with a lossy variant for dirty input.

mod decode;
mod encode;

pub use decode::{decode_component, decode_component_lossy, DecodeError};
pub use encode::{encode_bytes, encode_component};

/// Bytes that never need escaping in a URL component: ASCII alphanumerics
/// plus `-`, `_`, `.`, `~`.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}
