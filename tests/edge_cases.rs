#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the traffic selector codec: boundary conditions,
//! malformed wire input, and ownership behavior of the address buffers.

use ike_payload_codec::error::{ParseError, ValidationError};
use ike_payload_codec::host::{AddressFamily, Host};
use ike_payload_codec::payloads::{Payload, TrafficSelectorSubstructure, TsType, WireFormat};
use std::net::Ipv4Addr;

fn valid_selector() -> TrafficSelectorSubstructure {
    let mut ts = TrafficSelectorSubstructure::new();
    ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(10, 0, 0, 1), 0));
    ts.set_end_host(&Host::from_ipv4(Ipv4Addr::new(10, 0, 0, 2), 0));
    ts
}

// ============================================================================
// DECODE ERROR CASES
// ============================================================================

#[test]
fn test_decode_empty_input() {
    let err = TrafficSelectorSubstructure::from_bytes(&[]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Truncated {
            field: "selector type",
            ..
        }
    ));
}

#[test]
fn test_decode_truncated_header() {
    // Only selector type and protocol present
    let err = TrafficSelectorSubstructure::from_bytes(&[7, 6]).unwrap_err();
    assert!(matches!(err, ParseError::Truncated { .. }));
}

#[test]
fn test_decode_truncated_address() {
    // Declares 16 bytes but delivers only one address
    let bytes = [7, 6, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 10, 0, 0, 1];
    let err = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ParseError::Truncated { field: "address", .. }));
}

#[test]
fn test_decode_declared_length_too_small() {
    // 12 cannot cover the two 4-byte addresses of an IPv4 selector
    let bytes = [7, 6, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 10, 0, 0, 1, 10, 0, 0, 2];
    let err = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ParseError::LengthMismatch { declared: 12, .. }));
}

#[test]
fn test_decode_declared_length_too_large() {
    let bytes = [7, 6, 0x00, 0x14, 0x00, 0x00, 0x00, 0x00, 10, 0, 0, 1, 10, 0, 0, 2];
    let err = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        ParseError::LengthMismatch {
            declared: 20,
            consumed: 16,
        }
    ));
}

#[test]
fn test_decode_unknown_type_with_odd_body() {
    // Declared remainder of 3 cannot split across two equal-width fields
    let bytes = [99, 0, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 1, 2, 3];
    let err = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ParseError::LengthMismatch { declared: 11, .. }));
}

#[test]
fn test_decode_ignores_trailing_message_bytes() {
    let mut bytes = valid_selector().to_bytes().to_vec();
    bytes.extend_from_slice(&[0xEE; 8]); // next payload in the message
    let parsed = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, valid_selector());
}

// ============================================================================
// VALIDATION BOUNDARIES
// ============================================================================

#[test]
fn test_default_instance_fails_validation() {
    let ts = TrafficSelectorSubstructure::new();
    assert_eq!(ts.wire_length(), 8);
    assert_eq!(
        ts.validate().unwrap_err(),
        ValidationError::AddressLengthMismatch {
            expected: 4,
            actual: 0,
        }
    );
}

#[test]
fn test_equal_ports_are_valid() {
    let mut ts = TrafficSelectorSubstructure::new();
    ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(10, 0, 0, 1), 443));
    ts.set_end_host(&Host::from_ipv4(Ipv4Addr::new(10, 0, 0, 1), 443));
    assert!(ts.validate().is_ok());
}

#[test]
fn test_inverted_ports_from_wire() {
    let bytes = [7, 6, 0x00, 0x10, 0x01, 0x00, 0x00, 0xFF, 10, 0, 0, 1, 10, 0, 0, 2];
    let ts = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap();
    assert_eq!(
        ts.validate().unwrap_err(),
        ValidationError::PortRangeInverted {
            start: 256,
            end: 255,
        }
    );
}

#[test]
fn test_v6_selector_parses_but_never_validates() {
    // A well-formed 40-byte v6 selector decodes faithfully...
    let mut bytes = vec![8, 0, 0x00, 0x28, 0x00, 0x00, 0xFF, 0xFF];
    bytes.extend_from_slice(&[0x11; 16]);
    bytes.extend_from_slice(&[0x22; 16]);
    let ts = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap();
    assert_eq!(ts.wire_length(), 40);
    assert_eq!(ts.start_address().len(), 16);

    // ...but is rejected before it can reach policy construction.
    assert_eq!(
        ts.validate().unwrap_err(),
        ValidationError::UnsupportedSelectorType(TsType::Ipv6AddrRange as u8)
    );
}

#[test]
fn test_oversized_address_buffer_rejected() {
    let mut ts = TrafficSelectorSubstructure::new();
    ts.set_start_host(&Host::from_bytes(AddressFamily::Ipv4, vec![0; 16], 1));
    ts.set_end_host(&Host::from_bytes(AddressFamily::Ipv4, vec![0; 16], 2));
    assert_eq!(ts.wire_length(), 40);
    assert_eq!(
        ts.validate().unwrap_err(),
        ValidationError::AddressLengthMismatch {
            expected: 4,
            actual: 16,
        }
    );
}

// ============================================================================
// OWNERSHIP & DERIVED STATE
// ============================================================================

#[test]
fn test_setter_replaces_buffer_in_place() {
    let mut ts = valid_selector();
    ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(172, 16, 0, 1), 80));
    ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(172, 16, 0, 9), 81));

    // One buffer per side, holding only the last installed value
    assert_eq!(ts.start_address(), &[172, 16, 0, 9]);
    assert_eq!(ts.start_port(), 81);
    assert_eq!(ts.wire_length(), 16);
}

#[test]
fn test_wire_length_tracks_setter_sequence() {
    let mut ts = TrafficSelectorSubstructure::new();
    assert_eq!(ts.wire_length(), 8);

    ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(1, 2, 3, 4), 1));
    assert_eq!(ts.wire_length(), 12);

    ts.set_end_host(&Host::from_ipv4(Ipv4Addr::new(1, 2, 3, 5), 2));
    assert_eq!(ts.wire_length(), 16);

    ts.set_end_host(&Host::from_bytes(AddressFamily::Ipv4, vec![], 2));
    assert_eq!(ts.wire_length(), 12);
}

#[test]
fn test_returned_hosts_do_not_alias_payload_state() {
    let mut ts = valid_selector();
    let before = ts.start_host();
    ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(9, 9, 9, 9), 9));
    assert_eq!(before.address_bytes(), &[10, 0, 0, 1]);
}
