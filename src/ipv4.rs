//! IPv4 host recognition and octet decoding.
//!
//! # Grammar Reference
//!
//! ```abnf
//! IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
//! dec-octet   = "25" %x30-35          ; 250-255
//!             / "2" %x30-34 DIGIT     ; 200-249
//!             / "1" 2DIGIT            ; 100-199
//!             / ["0" ["0"]] DIGIT     ; 0-9
//!             / ["0"] DIGIT DIGIT     ; 10-99
//! ```
//!
//! Unlike RFC 3986, leading zeros are allowed as long as an octet is at most
//! three digits wide, so every alternative collapses to "one to three digits
//! with a value of at most 255".

use std::fmt;
use std::net::Ipv4Addr;

use crate::constants::{IPV4_OCTETS, MAX_DEC_OCTET_WIDTH, OCTET_DELIMITER};
use crate::error::OctetError;

/// An IPv4 host in dotted-decimal form.
///
/// The raw host text is kept as written; octets are decoded on demand.
/// Rendering with `Display` drops leading zeros.
///
/// # Examples
///
/// ```
/// use simple_uri::Ipv4Host;
///
/// let host = Ipv4Host::new("192.168.010.001");
/// assert_eq!(host.octets_unsigned().unwrap(), [192, 168, 10, 1]);
/// assert_eq!(host.to_string(), "192.168.10.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Host {
    raw: String,
}

impl Ipv4Host {
    /// Wraps a raw host string without checking it.
    ///
    /// Use [`Ipv4Host::matches`] first, or go through [`crate::Host::classify`],
    /// to only build hosts whose octets decode.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns true if `input` matches the `IPv4address` grammar.
    #[must_use]
    pub fn matches(input: &str) -> bool {
        recognize(input).is_some()
    }

    /// Returns the host exactly as it appeared in the URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Decodes the four octets as signed bytes.
    ///
    /// Values from 128 to 255 keep their bit pattern and read as negative.
    ///
    /// # Errors
    ///
    /// Returns `OctetError` if the stored string:
    /// - contains no dots
    /// - does not have exactly four parts
    /// - has a part that is not a decimal number
    /// - has a part outside 0-255
    pub fn octets(&self) -> Result<[i8; IPV4_OCTETS], OctetError> {
        self.octets_unsigned()
            .map(|octets| octets.map(|b| i8::from_ne_bytes([b])))
    }

    /// Decodes the four octets as unsigned bytes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Ipv4Host::octets`].
    pub fn octets_unsigned(&self) -> Result<[u8; IPV4_OCTETS], OctetError> {
        if !self.raw.contains(OCTET_DELIMITER) {
            return Err(OctetError::NoDots {
                value: self.raw.clone(),
            });
        }

        let parts: Vec<&str> = self.raw.split(OCTET_DELIMITER).collect();
        if parts.len() != IPV4_OCTETS {
            return Err(OctetError::PartCount {
                expected: IPV4_OCTETS,
                actual: parts.len(),
            });
        }

        let mut octets = [0u8; IPV4_OCTETS];
        for (index, (octet, part)) in octets.iter_mut().zip(parts).enumerate() {
            let value: i64 = part.parse().map_err(|_| OctetError::NotNumeric {
                part: part.to_string(),
                index,
            })?;
            *octet = u8::try_from(value).map_err(|_| OctetError::OutOfRange { value, index })?;
        }

        Ok(octets)
    }

    /// Converts to a standard library address.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Ipv4Host::octets`].
    pub fn to_ipv4_addr(&self) -> Result<Ipv4Addr, OctetError> {
        self.octets_unsigned().map(Ipv4Addr::from)
    }
}

impl fmt::Display for Ipv4Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octets_unsigned() {
            Ok([a, b, c, d]) => write!(f, "{a}.{b}.{c}.{d}"),
            // Unchecked hosts that do not decode render as written.
            Err(_) => f.write_str(&self.raw),
        }
    }
}

impl AsRef<str> for Ipv4Host {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Matches `input` against `IPv4address`, returning the decoded octets.
pub(crate) fn recognize(input: &str) -> Option<[u8; IPV4_OCTETS]> {
    let mut parts = input.as_bytes().split(|&b| b == b'.');
    let mut octets = [0u8; IPV4_OCTETS];
    for octet in &mut octets {
        *octet = dec_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}

/// `dec-octet`: one to three digits, value at most 255.
fn dec_octet(part: &[u8]) -> Option<u8> {
    if part.is_empty() || part.len() > MAX_DEC_OCTET_WIDTH {
        return None;
    }
    let mut value: u16 = 0;
    for &b in part {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u16::from(b - b'0');
    }
    u8::try_from(value).ok()
}
