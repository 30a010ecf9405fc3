//! Constants for URI decomposition and validation.

/// Separator between the scheme and the authority.
pub const SCHEME_DELIMITER: &str = "://";

/// Separator between the authority and the path.
pub const PATH_DELIMITER: char = '/';

/// Separator between the user info and the host.
pub const USER_INFO_DELIMITER: char = '@';

/// Separator between the path and the query.
pub const QUERY_DELIMITER: char = '?';

/// Separator between IPv4 octets.
pub const OCTET_DELIMITER: char = '.';

/// Number of octets in an IPv4 address.
pub const IPV4_OCTETS: usize = 4;

/// Maximum digits in one dotted-decimal octet, leading zeros included.
pub const MAX_DEC_OCTET_WIDTH: usize = 3;
