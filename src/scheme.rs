//! Scheme component.

use std::fmt;
use std::str::FromStr;

use crate::error::{Component, ComponentError};
use crate::grammar::invalid_char;

/// A validated URI scheme.
///
/// ```abnf
/// scheme = ALPHA *( ALPHA / DIGIT )
/// ```
///
/// Case is preserved; `HTTPS` and `https` are different schemes here.
///
/// # Examples
///
/// ```
/// use simple_uri::Scheme;
///
/// let scheme = Scheme::parse("HtTpS").unwrap();
/// assert_eq!(scheme.as_str(), "HtTpS");
///
/// assert!(Scheme::parse("0https").is_err());
/// assert!(Scheme::parse("ht-tp").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scheme(String);

impl Scheme {
    /// Parses a scheme.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if:
    /// - The scheme is empty
    /// - The first character is not a letter
    /// - A later character is not a letter or digit
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Checks a scheme without allocating.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Scheme::parse`].
    pub fn validate(input: &str) -> Result<(), ComponentError> {
        let Some(first) = input.chars().next() else {
            return Err(ComponentError::Missing {
                component: Component::Scheme,
            });
        };

        if !first.is_ascii_alphabetic() {
            return Err(ComponentError::MustStartWithLetter { found: first });
        }

        match input.bytes().position(|b| !b.is_ascii_alphanumeric()) {
            Some(position) => Err(invalid_char(input, Component::Scheme, position)),
            None => Ok(()),
        }
    }

    /// Returns the scheme as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Scheme {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Scheme {
    type Error = ComponentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
