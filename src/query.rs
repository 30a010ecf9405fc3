//! Query component.

use std::fmt;
use std::str::FromStr;

use crate::error::{Component, ComponentError};
use crate::grammar::{check_pct_class, is_unreserved};

/// A validated query string (without the leading `?`).
///
/// ```abnf
/// query = *( unreserved / "&" / "=" / pct-encoded )
/// ```
///
/// The query is kept verbatim. [`Query::pairs`] splits it into raw
/// `name=value` pairs without decoding.
///
/// # Examples
///
/// ```
/// use simple_uri::Query;
///
/// let query = Query::parse("v=dQw4w9WgXcQ&t=42").unwrap();
/// assert_eq!(query.get("t"), Some("42"));
///
/// assert!(Query::parse("").is_err());
/// assert!(Query::parse("q=a b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Query(String);

impl Query {
    /// Parses a query string.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the query is empty, contains a character
    /// outside the grammar, or has a `%` not followed by two hex digits.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Checks a query string without allocating.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Query::parse`].
    pub fn validate(input: &str) -> Result<(), ComponentError> {
        if input.is_empty() {
            return Err(ComponentError::Missing {
                component: Component::Query,
            });
        }
        check_pct_class(input, Component::Query, |b| {
            is_unreserved(b) || b == b'&' || b == b'='
        })
    }

    /// Returns the query as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an iterator over the raw `(name, value)` pairs.
    ///
    /// Pairs are separated by `&`; empty pairs are skipped. A pair without
    /// `=` has an empty value. Nothing is percent-decoded.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
    }

    /// Returns the raw value of the first pair named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Query {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Query {
    type Error = ComponentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_param() {
        let query = Query::parse("v=dQw4w9WgXcQ").unwrap();
        assert_eq!(query.as_str(), "v=dQw4w9WgXcQ");
        assert_eq!(query.get("v"), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn parse_without_equals() {
        let query = Query::parse("wowthisisnice").unwrap();
        assert_eq!(query.get("wowthisisnice"), Some(""));
    }

    #[test]
    fn parse_dots_only() {
        assert!(Query::parse("...").is_ok());
    }

    #[test]
    fn parse_percent_encoded() {
        let query = Query::parse("query=hello%20world%26more").unwrap();
        // Values are not decoded.
        assert_eq!(query.get("query"), Some("hello%20world%26more"));
    }

    #[test]
    fn parse_empty_fails() {
        let result = Query::parse("");
        assert!(matches!(result, Err(ComponentError::Missing { .. })));
    }

    #[test]
    fn parse_bad_percent_fails() {
        let result = Query::parse("a=%G1");
        assert!(matches!(
            result,
            Err(ComponentError::InvalidPercentEncoding { position: 2, .. })
        ));
        assert!(Query::parse("a=100%").is_err());
    }

    #[test]
    fn parse_invalid_char_fails() {
        let result = Query::parse("a=b;c");
        assert!(matches!(
            result,
            Err(ComponentError::InvalidChar { char: ';', .. })
        ));
        assert!(Query::parse("a=b?c").is_err());
    }

    #[test]
    fn pairs_skip_empty() {
        let query = Query::parse("a=1&&b=2&c").unwrap();
        let items: Vec<_> = query.pairs().collect();
        assert_eq!(items, vec![("a", "1"), ("b", "2"), ("c", "")]);
    }

    #[test]
    fn get_returns_first_match() {
        let query = Query::parse("a=1&a=2").unwrap();
        assert_eq!(query.get("a"), Some("1"));
        assert_eq!(query.get("b"), None);
    }
}
