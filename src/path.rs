//! Path component.

use std::fmt;
use std::str::FromStr;

use crate::constants::PATH_DELIMITER;
use crate::error::{Component, ComponentError};
use crate::grammar::{check_pct_class, is_unreserved};

/// A validated path.
///
/// ```abnf
/// path    = *( "/" segment )
/// segment = *( unreserved / pct-encoded )
/// ```
///
/// The `/` that separates the authority from the path is consumed while
/// splitting the URI, so a path holds whatever followed it: `watch` for
/// `https://host/watch`, `/path` for `https://host//path`. The grammar is
/// checked against the path with that separator restored, which allows any
/// mix of segment characters and further slashes. The empty path is valid.
///
/// # Examples
///
/// ```
/// use simple_uri::Path;
///
/// assert_eq!(Path::parse("docs/v1.2").unwrap().as_str(), "docs/v1.2");
/// assert_eq!(Path::parse("").unwrap().as_str(), "");
/// assert!(Path::parse("a%2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(String);

impl Path {
    /// Parses a path.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the path contains a character outside the
    /// grammar or a `%` not followed by two hex digits.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Checks a path without allocating.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Path::parse`].
    pub fn validate(input: &str) -> Result<(), ComponentError> {
        check_pct_class(input, Component::Path, |b| {
            is_unreserved(b) || char::from(b) == PATH_DELIMITER
        })
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the `/`-separated segments.
    ///
    /// The empty path has a single empty segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_DELIMITER)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Path {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Path {
    type Error = ComponentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
