//! User info component.

use std::fmt;
use std::str::FromStr;

use crate::error::{Component, ComponentError};
use crate::grammar::{check_pct_class, is_unreserved};

/// Validated user info from the authority.
///
/// ```abnf
/// userinfo = *( unreserved / ":" / pct-encoded )
/// ```
///
/// An empty user info (`https://@host`) counts as missing.
///
/// # Examples
///
/// ```
/// use simple_uri::UserInfo;
///
/// let info = UserInfo::parse("user%20name:pass").unwrap();
/// assert_eq!(info.as_str(), "user%20name:pass");
///
/// assert!(UserInfo::parse("user%ZZname").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserInfo(String);

impl UserInfo {
    /// Parses user info.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the input is empty, contains a character
    /// outside the grammar, or has a `%` not followed by two hex digits.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Checks user info without allocating.
    ///
    /// # Errors
    ///
    /// Same conditions as [`UserInfo::parse`].
    pub fn validate(input: &str) -> Result<(), ComponentError> {
        if input.is_empty() {
            return Err(ComponentError::Missing {
                component: Component::UserInfo,
            });
        }
        check_pct_class(input, Component::UserInfo, |b| {
            is_unreserved(b) || b == b':'
        })
    }

    /// Returns the user info as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserInfo {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for UserInfo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for UserInfo {
    type Error = ComponentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
