//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use simple_uri::prelude::*;
//!
//! let uri = Uri::parse("https://example.com/docs").unwrap();
//! assert_eq!(uri.path(), Some("docs"));
//! ```

pub use crate::{
    // Core types
    Host, Ipv4Host, RawComponents, RegName, Uri, UriParser,
    // Component validators
    Path, Query, Scheme, UserInfo,
    // Errors
    Component, ComponentError, OctetError, ParseError, ParseErrorKind,
    // Entry point
    create,
};
