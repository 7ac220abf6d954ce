//! Percent-encoding of component bytes.

use super::is_unreserved;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encodes raw bytes for use as a URL component.
///
/// Every byte outside the unreserved set becomes `%XX` with uppercase hex;
/// unreserved bytes pass through unchanged. Output grows at most 3x.
pub fn encode_bytes(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[(byte >> 4) as usize] as char);
            out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
        }
    }
    out
}

/// Percent-encodes a string's UTF-8 bytes for use as a URL component
/// (path segment or query part).
///
/// Space encodes to `%20`, not `+`; multibyte characters encode one `%XX`
/// escape per UTF-8 byte.
///
/// # Examples
///
/// - `encode_component("a b")` → `"a%20b"`
/// - `encode_component("a/b?c=d")` → `"a%2Fb%3Fc%3Dd"`
pub fn encode_component(input: &str) -> String {
    encode_bytes(input.as_bytes())
}
