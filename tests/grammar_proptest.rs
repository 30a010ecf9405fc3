//! Property-based tests validating the parser against the URI grammar.
//!
//! These tests generate random inputs according to grammar constraints and
//! verify the parser's component accessors agree with them.

use proptest::prelude::*;

use simple_uri::{Host, Ipv4Host, RegName, Scheme, Uri};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Generate a valid scheme (ALPHA followed by ALPHA / DIGIT)
    pub fn scheme() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9]{0,10}"
    }

    /// Generate non-empty user info (unreserved, colon, or percent-encoded)
    pub fn user_info() -> impl Strategy<Value = String> {
        "([A-Za-z0-9.:]|%[0-9A-Fa-f]{2}){1,16}"
    }

    /// Generate a reg-name that can never be read as an IPv4 address
    pub fn reg_name() -> impl Strategy<Value = String> {
        "[A-Za-z]([A-Za-z0-9.]|%[0-9A-Fa-f]{2}){0,20}"
    }

    /// Generate a path slot (segments of unreserved or percent-encoded characters)
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec("([A-Za-z0-9.]|%[0-9A-Fa-f]{2}){0,8}", 0..=4)
            .prop_map(|segments| segments.join("/"))
    }

    /// Generate a non-empty query
    pub fn query() -> impl Strategy<Value = String> {
        "([A-Za-z0-9.&=]|%[0-9A-Fa-f]{2}){1,20}"
    }

    /// Generate an IPv4 address where each octet may carry leading zeros
    pub fn padded_ipv4() -> impl Strategy<Value = (String, [u8; 4])> {
        prop::array::uniform4((any::<u8>(), any::<bool>())).prop_map(|parts| {
            let text = parts
                .iter()
                .map(|(octet, pad)| {
                    if *pad {
                        format!("{octet:03}")
                    } else {
                        octet.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(".");
            (text, parts.map(|(octet, _)| octet))
        })
    }

    /// Generate an arbitrary host slot (anything the decomposer can place there)
    pub fn any_host() -> impl Strategy<Value = String> {
        "[^/@]{0,16}"
    }

    /// Generate a complete URI along with its expected components
    pub fn uri() -> impl Strategy<Value = (String, Parts)> {
        (
            scheme(),
            prop::option::of(user_info()),
            reg_name(),
            prop::option::of(path()),
            prop::option::of(query()),
        )
            .prop_map(|(scheme, user_info, host, path, query)| {
                let mut uri = format!("{scheme}://");
                if let Some(info) = &user_info {
                    uri.push_str(info);
                    uri.push('@');
                }
                uri.push_str(&host);
                // A query is only recognized after the path delimiter.
                let path = match (path, &query) {
                    (None, Some(_)) => Some(String::new()),
                    (path, _) => path,
                };
                if let Some(path) = &path {
                    uri.push('/');
                    uri.push_str(path);
                }
                if let Some(query) = &query {
                    uri.push('?');
                    uri.push_str(query);
                }
                let parts = Parts {
                    scheme,
                    user_info,
                    host,
                    path: path.unwrap_or_default(),
                    query,
                };
                (uri, parts)
            })
    }

    /// The components a generated URI was assembled from.
    #[derive(Debug, Clone)]
    pub struct Parts {
        pub scheme: String,
        pub user_info: Option<String>,
        pub host: String,
        pub path: String,
        pub query: Option<String>,
    }
}

mod component_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_uris_expose_every_component((input, parts) in uri()) {
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.scheme(), Some(parts.scheme.as_str()));
            prop_assert_eq!(uri.user_info(), parts.user_info.as_deref());
            prop_assert_eq!(uri.host().to_string(), parts.host);
            prop_assert_eq!(uri.path(), Some(parts.path.as_str()));
            prop_assert_eq!(uri.query(), parts.query.as_deref());
            prop_assert!(uri.validate().is_ok());
        }

        #[test]
        fn accessors_are_repeatable((input, _parts) in uri()) {
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.scheme(), uri.scheme());
            prop_assert_eq!(uri.user_info(), uri.user_info());
            prop_assert_eq!(uri.host(), uri.host());
            prop_assert_eq!(uri.path(), uri.path());
            prop_assert_eq!(uri.query(), uri.query());
        }

        #[test]
        fn display_round_trips((input, _parts) in uri()) {
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.to_string(), input);
        }
    }
}

mod validation_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// A malformed component never hides the others.
        #[test]
        fn invalid_component_is_isolated(
            scheme in scheme(),
            info in user_info(),
            host in reg_name(),
            path in path(),
            query in query(),
            bad in prop::array::uniform4(any::<bool>()),
        ) {
            let scheme_slot = if bad[0] { format!("1{scheme}") } else { scheme.clone() };
            let info_slot = if bad[1] { format!("{info}$") } else { info.clone() };
            let path_slot = if bad[2] { format!("{path}$") } else { path.clone() };
            let query_slot = if bad[3] { format!("{query}$") } else { query.clone() };

            let input = format!("{scheme_slot}://{info_slot}@{host}/{path_slot}?{query_slot}");
            let uri = Uri::parse(&input).unwrap();

            prop_assert_eq!(uri.scheme(), (!bad[0]).then_some(scheme.as_str()));
            prop_assert_eq!(uri.user_info(), (!bad[1]).then_some(info.as_str()));
            prop_assert_eq!(uri.host().to_string(), host);
            prop_assert_eq!(uri.path(), (!bad[2]).then_some(path.as_str()));
            prop_assert_eq!(uri.query(), (!bad[3]).then_some(query.as_str()));
            prop_assert_eq!(uri.validate().is_ok(), !bad.contains(&true));
        }

        /// Any non-empty scheme slot parses, and the accessor agrees with the grammar.
        #[test]
        fn scheme_slot_is_total(slot in "[^:]{1,12}") {
            let input = format!("{slot}://example.com");
            let uri = Uri::parse(&input).unwrap();
            prop_assert_eq!(uri.components().scheme, slot.as_str());

            let mut chars = slot.chars();
            let expected = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric());
            prop_assert_eq!(uri.scheme().is_some(), expected);
            prop_assert_eq!(Scheme::validate(&slot).is_ok(), expected);
        }

        #[test]
        fn inputs_without_delimiter_are_rejected(input in "[^:]{0,24}") {
            prop_assert!(Uri::parse(&input).is_err());
        }
    }
}

mod host_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn padded_ipv4_renders_canonical((text, octets) in padded_ipv4()) {
            let host = Host::classify(&text);
            prop_assert!(host.is_ipv4(), "not classified as IPv4: {}", text);
            let expected = octets.map(|o| o.to_string()).join(".");
            prop_assert_eq!(host.to_string(), expected);
        }

        #[test]
        fn octets_round_trip((text, octets) in padded_ipv4()) {
            let ip = Ipv4Host::new(text);
            let signed = ip.octets().unwrap();
            prop_assert_eq!(signed.map(|o| o.to_ne_bytes()[0]), octets);
            prop_assert_eq!(ip.octets_unsigned().unwrap(), octets);
        }

        #[test]
        fn ipv4_beats_reg_name((text, _octets) in padded_ipv4()) {
            // Every IPv4 address also passes the reg-name screen.
            prop_assert!(RegName::matches(&text));
            let input = format!("scheme://{text}/");
            prop_assert!(Uri::parse(&input).unwrap().host().is_ipv4());
        }

        #[test]
        fn reg_names_render_verbatim(name in reg_name()) {
            let host = Host::classify(&name);
            prop_assert!(!host.is_ipv4());
            prop_assert_eq!(host.to_string(), name);
        }

        #[test]
        fn host_is_never_absent(slot in any_host()) {
            let input = format!("scheme://{slot}");
            let uri = Uri::parse(&input).unwrap();
            let host = uri.host();
            let valid = slot.is_empty() || Ipv4Host::matches(&slot) || RegName::matches(&slot);
            prop_assert_eq!(host.is_valid(), valid);
            if !valid {
                prop_assert_eq!(host.to_string(), "");
            }
        }
    }
}
