//! Host classification.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host     = IPv4address / reg-name
//! reg-name = *( unreserved / "%" / pct-encoded )
//! ```
//!
//! `IPv4address` takes precedence: a host matching it is never a reg-name.
//! The reg-name screen accepts a bare `%`, which is looser than the
//! `pct-encoded` rule applied to user info, path, and query.

use std::cmp::Ordering;
use std::fmt;

use crate::grammar::is_unreserved;
use crate::ipv4::{self, Ipv4Host};
use crate::log::trace;

/// A registered name host, such as `example.com`.
///
/// Holds `None` when the host was present in the URI but failed validation.
/// Both the empty and the invalid name render as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegName(Option<String>);

impl RegName {
    /// Creates a name from raw text without validating it.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// The name of a URI with an empty authority.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Some(String::new()))
    }

    /// The name of a URI whose host failed validation.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Returns the stored name, or `None` for an invalid host.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns false for the invalid-host sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns true if `input` passes the reg-name character screen.
    #[must_use]
    pub fn matches(input: &str) -> bool {
        input.bytes().all(|b| is_unreserved(b) || b == b'%')
    }
}

impl fmt::Display for RegName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or_default())
    }
}

/// The host of a URI.
///
/// # Examples
///
/// ```
/// use simple_uri::Host;
///
/// let host = Host::classify("192.168.010.001");
/// assert!(host.is_ipv4());
/// assert_eq!(host.to_string(), "192.168.10.1");
///
/// let host = Host::classify("www.example.com");
/// assert!(!host.is_ipv4());
/// assert_eq!(host.to_string(), "www.example.com");
///
/// // Present but invalid hosts render as empty.
/// let host = Host::classify("bad host!");
/// assert!(!host.is_valid());
/// assert_eq!(host.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A registered name, possibly empty or invalid
    RegName(RegName),
    /// A dotted-decimal IPv4 address
    Ipv4(Ipv4Host),
}

impl Host {
    /// Classifies a raw host slot.
    ///
    /// Never fails: an empty slot yields an empty reg-name, and a slot that
    /// is neither IPv4 nor a valid reg-name yields [`RegName::invalid`].
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let host = if input.is_empty() {
            Self::RegName(RegName::empty())
        } else if ipv4::recognize(input).is_some() {
            Self::Ipv4(Ipv4Host::new(input))
        } else if RegName::matches(input) {
            Self::RegName(RegName::new(input))
        } else {
            Self::RegName(RegName::invalid())
        };
        trace!("classified host {input:?} as {host:?}");
        host
    }

    /// Returns true if this is an IPv4 address.
    #[must_use]
    pub const fn is_ipv4(&self) -> bool {
        matches!(self, Self::Ipv4(_))
    }

    /// Returns the IPv4 address, if this is one.
    #[must_use]
    pub const fn as_ipv4(&self) -> Option<&Ipv4Host> {
        match self {
            Self::Ipv4(ip) => Some(ip),
            Self::RegName(_) => None,
        }
    }

    /// Returns the registered name, if this is one.
    #[must_use]
    pub const fn as_reg_name(&self) -> Option<&RegName> {
        match self {
            Self::RegName(name) => Some(name),
            Self::Ipv4(_) => None,
        }
    }

    /// Returns false only for a host that was present but invalid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        match self {
            Self::RegName(name) => name.is_valid(),
            Self::Ipv4(_) => true,
        }
    }

    /// Returns the host as written in the URI, or `None` if it was invalid.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::RegName(name) => name.as_str(),
            Self::Ipv4(ip) => Some(ip.as_str()),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegName(name) => fmt::Display::fmt(name, f),
            Self::Ipv4(ip) => fmt::Display::fmt(ip, f),
        }
    }
}

impl From<&str> for Host {
    fn from(s: &str) -> Self {
        Self::classify(s)
    }
}

impl PartialOrd for Host {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Host {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::RegName(a), Self::RegName(b)) => a.cmp(b),
            (Self::Ipv4(a), Self::Ipv4(b)) => a.as_str().cmp(b.as_str()),
            (Self::RegName(_), Self::Ipv4(_)) => Ordering::Less,
            (Self::Ipv4(_), Self::RegName(_)) => Ordering::Greater,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::classify(&s))
    }
}
