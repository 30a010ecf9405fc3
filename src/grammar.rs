//! Character classes shared by the component grammars.
//!
//! ```abnf
//! unreserved  = ALPHA / DIGIT / "."
//! pct-encoded = "%" HEXDIG HEXDIG
//! ```
//!
//! `unreserved` is deliberately narrower than RFC 3986 (no `-`, `_`, `~`).

use crate::error::{Component, ComponentError};

/// Returns true if the byte matches `unreserved`.
pub(crate) const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.'
}

/// Returns true if `bytes[index..]` starts with a `pct-encoded` triple.
pub(crate) fn is_pct_encoded(bytes: &[u8], index: usize) -> bool {
    matches!(
        bytes.get(index..index + 3),
        Some([b'%', hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
    )
}

/// Checks `input` against `*( allowed / pct-encoded )`.
///
/// A `%` is only accepted as the start of a complete `%HH` triple.
pub(crate) fn check_pct_class(
    input: &str,
    component: Component,
    allowed: impl Fn(u8) -> bool,
) -> Result<(), ComponentError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            if !is_pct_encoded(bytes, i) {
                return Err(ComponentError::InvalidPercentEncoding {
                    component,
                    position: i,
                });
            }
            i += 3;
        } else if allowed(b) {
            i += 1;
        } else {
            return Err(invalid_char(input, component, i));
        }
    }
    Ok(())
}

/// Builds an `InvalidChar` error for the character starting at `position`.
///
/// Every accepted byte is ASCII, so the first rejected byte always sits on a
/// char boundary.
pub(crate) fn invalid_char(input: &str, component: Component, position: usize) -> ComponentError {
    let char = input[position..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ComponentError::InvalidChar {
        component,
        char,
        position,
    }
}
