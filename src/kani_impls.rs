//! Kani proof harnesses for host classification and decomposition.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::ipv4::recognize;
use crate::{Host, Ipv4Host, Uri};

/// Characters that exercise every branch of the host grammars.
const HOST_CHARS: &[u8] = b"0123456789.%aZ-";

/// Generate a host-like ASCII string of up to `max` characters
fn arbitrary_host(max: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            HOST_CHARS[idx % HOST_CHARS.len()] as char
        })
        .collect()
}

/// Generate an IPv4 address with optional leading zeros on each octet
fn arbitrary_padded_ipv4() -> (String, [u8; 4]) {
    let octets: [u8; 4] = kani::any();
    let parts: Vec<String> = octets
        .iter()
        .map(|o| {
            let pad: bool = kani::any();
            if pad && *o < 100 {
                format!("0{o}")
            } else {
                o.to_string()
            }
        })
        .collect();
    (parts.join("."), octets)
}

/// Proof: Every padded dotted-decimal address is recognized with its octets
#[kani::proof]
#[kani::unwind(20)]
fn proof_padded_ipv4_recognized() {
    let (text, octets) = arbitrary_padded_ipv4();
    assert_eq!(recognize(&text), Some(octets));
}

/// Proof: Recognized hosts decode and render without leading zeros
#[kani::proof]
#[kani::unwind(20)]
fn proof_ipv4_renders_canonical() {
    let (text, octets) = arbitrary_padded_ipv4();
    let host = Ipv4Host::new(text);
    assert_eq!(host.octets_unsigned(), Ok(octets));
    let rendered = host.to_string();
    assert!(rendered.split('.').all(|p| p == "0" || !p.starts_with('0')));
}

/// Proof: Classification agrees with the recognizer and never panics
#[kani::proof]
#[kani::unwind(10)]
fn proof_classifier_precedence() {
    let input = arbitrary_host(8);
    let host = Host::classify(&input);
    assert_eq!(host.is_ipv4(), recognize(&input).is_some());
}

/// Proof: Any scheme prefix followed by `://` parses
#[kani::proof]
#[kani::unwind(10)]
fn proof_nonempty_scheme_parses() {
    let scheme = arbitrary_host(4);
    kani::assume(!scheme.is_empty() && !scheme.contains(':'));
    let input = format!("{scheme}://");
    let uri = Uri::parse(&input).expect("non-empty scheme parses");
    assert_eq!(uri.components().scheme, scheme);
}
