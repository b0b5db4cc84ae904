//! Form encoding shared by request signing and query strings
//!
//! The BOTR API does not accept `+` for spaces, so components are encoded
//! with `%20` instead. Everything outside `A-Z a-z 0-9 * - . _` is
//! percent-encoded as UTF-8 with uppercase hex digits.

use crate::{Error, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters that must be escaped in a form component
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-encode a single name or value
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, FORM_COMPONENT).to_string()
}

/// Encode name/value pairs as `name=value&name=value`, in the given order
pub fn encode_form<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                encode_component(name.as_ref()),
                encode_component(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a form component, rejecting malformed escapes instead of repairing them
pub fn decode_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(Error::encoding(format!("invalid %-encoding ({})", input)));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::encoding(format!("invalid UTF-8 in ({}): {}", input, e)))
}
