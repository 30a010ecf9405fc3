//! Error types for URI parsing and component validation.

use std::fmt;

/// Errors that reject an input as a whole.
///
/// Only structural problems produce a `ParseError`. A URI whose components
/// are malformed still parses; the affected accessors report them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input does not contain `://`
    MissingSchemeDelimiter,
    /// Nothing precedes the first `://`
    EmptyScheme,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MissingSchemeDelimiter => {
                write!(f, "missing '://' after the scheme")
            }
            ParseErrorKind::EmptyScheme => write!(f, "scheme cannot be empty"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The URI component a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The scheme, before `://`
    Scheme,
    /// The user info, before `@` in the authority
    UserInfo,
    /// The host
    Host,
    /// The path, after the authority
    Path,
    /// The query, after `?`
    Query,
}

impl Component {
    /// Returns the lowercase name of the component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::UserInfo => "user info",
            Self::Host => "host",
            Self::Path => "path",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors for component validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Component is absent, or empty where empty counts as absent
    Missing {
        /// The missing component
        component: Component,
    },
    /// Scheme must start with a letter
    MustStartWithLetter {
        /// The character found
        found: char,
    },
    /// Character outside the component's grammar
    InvalidChar {
        /// The component being validated
        component: Component,
        /// The invalid character
        char: char,
        /// Byte offset within the component
        position: usize,
    },
    /// `%` not followed by two hex digits
    InvalidPercentEncoding {
        /// The component being validated
        component: Component,
        /// Byte offset of the `%` within the component
        position: usize,
    },
}

impl ComponentError {
    /// Returns the component this error refers to.
    #[must_use]
    pub const fn component(&self) -> Component {
        match self {
            Self::Missing { component }
            | Self::InvalidChar { component, .. }
            | Self::InvalidPercentEncoding { component, .. } => *component,
            Self::MustStartWithLetter { .. } => Component::Scheme,
        }
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { component } => write!(f, "{component} is missing"),
            Self::MustStartWithLetter { found } => {
                write!(f, "scheme must start with a letter, found '{found}'")
            }
            Self::InvalidChar {
                component,
                char,
                position,
            } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position} in {component}"
                )
            }
            Self::InvalidPercentEncoding {
                component,
                position,
            } => {
                write!(
                    f,
                    "invalid percent encoding at position {position} in {component}; expected '%' followed by two hex digits"
                )
            }
        }
    }
}

impl std::error::Error for ComponentError {}

/// Errors for IPv4 octet extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OctetError {
    /// The address contains no dots
    NoDots {
        /// The offending address
        value: String,
    },
    /// The address does not have exactly four parts
    PartCount {
        /// Required number of parts
        expected: usize,
        /// Actual number of parts
        actual: usize,
    },
    /// A part is not a decimal number
    NotNumeric {
        /// The offending part
        part: String,
        /// Index of the part
        index: usize,
    },
    /// A part is outside 0-255
    OutOfRange {
        /// The decoded value
        value: i64,
        /// Index of the part
        index: usize,
    },
}

impl fmt::Display for OctetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDots { value } => {
                write!(f, "invalid IPv4 address '{value}': no dots found")
            }
            Self::PartCount { expected, actual } => {
                write!(f, "IPv4 address has {actual} parts, expected {expected}")
            }
            Self::NotNumeric { part, index } => {
                write!(f, "octet '{part}' at index {index} is not a decimal number")
            }
            Self::OutOfRange { value, index } => {
                write!(f, "octet {value} at index {index} is out of range 0-255")
            }
        }
    }
}

impl std::error::Error for OctetError {}
