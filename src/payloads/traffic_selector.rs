//! # Traffic Selector Substructure
//!
//! Describes an address and port range a negotiated security policy
//! applies to. Appears nested inside a parent traffic selector payload,
//! so it carries no chaining pointer of its own.
//!
//! ## Wire Format
//! ```text
//! [TsType(1)] [Protocol(1)] [Length(2)] [StartPort(2)] [EndPort(2)] [StartAddr(N)] [EndAddr(N)]
//! ```
//! All integers big-endian; the two address fields share one
//! type-determined width (4 bytes for the IPv4 range type). Total size
//! is always `8 + 2 * N`.
//!
//! ## Security
//! - Declared length is bounds-checked against consumed field widths
//! - IPv6 (and unknown) selector types parse but never validate, so they
//!   cannot reach policy construction

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::encoding::rules::{EncodingTable, FieldRule};
use crate::encoding::{decode_into, encode};
use crate::error::{ParseError, ParseResult, ValidationError, ValidationResult};
use crate::host::{AddressFamily, Host};
use crate::payloads::{Payload, PayloadKind, WireFormat};

/// Fixed header size of the substructure: type, protocol, length and
/// both ports.
pub const TRAFFIC_SELECTOR_HEADER_LENGTH: u16 = 8;

/// Address width of the IPv4 range selector type.
pub const IPV4_ADDRESS_LENGTH: usize = 4;

/// Traffic selector type discriminant.
///
/// Numeric values are the registry codes used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TsType {
    /// Range of IPv4 addresses, 4-byte address fields.
    Ipv4AddrRange = 7,
    /// Range of IPv6 addresses, 16-byte address fields. Defined on the
    /// wire but rejected by validation in this version.
    Ipv6AddrRange = 8,
}

impl TsType {
    /// Map a wire value back to a known selector type.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            7 => Some(TsType::Ipv4AddrRange),
            8 => Some(TsType::Ipv6AddrRange),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            TsType::Ipv4AddrRange => "TS_IPV4_ADDR_RANGE",
            TsType::Ipv6AddrRange => "TS_IPV6_ADDR_RANGE",
        }
    }
}

/// A traffic selector substructure instance.
///
/// Sole owner of its two address buffers; replacing either through a
/// host setter drops the previous buffer, and `Drop` releases both.
/// `payload_length` is derived state, recomputed by the setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficSelectorSubstructure {
    /// Selector type discriminant, kept raw so unknown wire values
    /// survive a decode/encode cycle and are rejected by validation.
    ts_type: u8,
    /// IP protocol identifier (0 = any).
    protocol_id: u8,
    /// Total wire length of this substructure.
    payload_length: u16,
    /// Start of the port range.
    start_port: u16,
    /// End of the port range.
    end_port: u16,
    /// Range start address, wire form.
    start_address: Vec<u8>,
    /// Range end address, wire form.
    end_address: Vec<u8>,
}

/// Encoding rules for the traffic selector substructure, in wire order.
const ENCODING_RULES: &[FieldRule<TrafficSelectorSubstructure>] = &[
    FieldRule::SelectorType {
        get: |p| p.ts_type,
        set: |p, v| p.ts_type = v,
    },
    FieldRule::U8 {
        get: |p| p.protocol_id,
        set: |p, v| p.protocol_id = v,
    },
    FieldRule::PayloadLength {
        get: |p| p.payload_length,
        set: |p, v| p.payload_length = v,
    },
    FieldRule::U16 {
        get: |p| p.start_port,
        set: |p, v| p.start_port = v,
    },
    FieldRule::U16 {
        get: |p| p.end_port,
        set: |p, v| p.end_port = v,
    },
    FieldRule::Address {
        get: |p| p.start_address.as_slice(),
        set: |p, v| p.start_address = v,
    },
    FieldRule::Address {
        get: |p| p.end_address.as_slice(),
        set: |p, v| p.end_address = v,
    },
];

impl Default for TrafficSelectorSubstructure {
    fn default() -> Self {
        Self {
            // must be set to a supported type to be valid
            ts_type: TsType::Ipv4AddrRange as u8,
            protocol_id: 0,
            payload_length: TRAFFIC_SELECTOR_HEADER_LENGTH,
            start_port: 0,
            end_port: 0,
            start_address: Vec::new(),
            end_address: Vec::new(),
        }
    }
}

impl TrafficSelectorSubstructure {
    /// Create an empty IPv4 selector with zero ports and no addresses.
    ///
    /// The default fails validation until both addresses are installed
    /// (empty buffers are not 4 bytes wide).
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw selector type discriminant.
    pub fn ts_type(&self) -> u8 {
        self.ts_type
    }

    /// Set the selector type.
    pub fn set_ts_type(&mut self, ts_type: TsType) {
        self.ts_type = ts_type as u8;
    }

    /// The IP protocol identifier (0 = any).
    pub fn protocol_id(&self) -> u8 {
        self.protocol_id
    }

    /// Set the IP protocol identifier.
    pub fn set_protocol_id(&mut self, protocol_id: u8) {
        self.protocol_id = protocol_id;
    }

    /// Start of the port range.
    pub fn start_port(&self) -> u16 {
        self.start_port
    }

    /// End of the port range.
    pub fn end_port(&self) -> u16 {
        self.end_port
    }

    /// Range start address in wire form.
    pub fn start_address(&self) -> &[u8] {
        &self.start_address
    }

    /// Range end address in wire form.
    pub fn end_address(&self) -> &[u8] {
        &self.end_address
    }

    /// The range start as an independently owned host value.
    ///
    /// The family is fixed to IPv4; v6 selectors never pass
    /// [`validate`](Payload::validate), so they cannot reach this
    /// accessor through a validated payload.
    pub fn start_host(&self) -> Host {
        Host::from_bytes(
            AddressFamily::Ipv4,
            self.start_address.clone(),
            self.start_port,
        )
    }

    /// Install the range start from a host, replacing the previously
    /// owned address buffer and recomputing the wire length.
    pub fn set_start_host(&mut self, host: &Host) {
        self.start_port = host.port();
        self.start_address = host.address_bytes().to_vec();
        self.recompute_length();
    }

    /// The range end as an independently owned host value.
    pub fn end_host(&self) -> Host {
        Host::from_bytes(
            AddressFamily::Ipv4,
            self.end_address.clone(),
            self.end_port,
        )
    }

    /// Install the range end from a host, replacing the previously
    /// owned address buffer and recomputing the wire length.
    pub fn set_end_host(&mut self, host: &Host) {
        self.end_port = host.port();
        self.end_address = host.address_bytes().to_vec();
        self.recompute_length();
    }

    fn recompute_length(&mut self) {
        self.payload_length = TRAFFIC_SELECTOR_HEADER_LENGTH
            + (self.start_address.len() + self.end_address.len()) as u16;
    }

    /// Address field width implied by the selector type at octet 0.
    ///
    /// Unknown types still get their bytes consumed faithfully so that
    /// validation (not silent truncation) rejects them: the declared
    /// remainder is split evenly across the two address fields, and any
    /// leftover byte surfaces as a length mismatch from the engine.
    fn address_len_for(src: &[u8], ts_type: u8) -> ParseResult<usize> {
        if TsType::from_u8(ts_type) == Some(TsType::Ipv4AddrRange) {
            return Ok(IPV4_ADDRESS_LENGTH);
        }
        if src.len() < 4 {
            return Err(ParseError::Truncated {
                field: "payload length",
                needed: 2,
                remaining: src.len().saturating_sub(2),
            });
        }
        let declared = u16::from_be_bytes([src[2], src[3]]) as usize;
        Ok(declared.saturating_sub(TRAFFIC_SELECTOR_HEADER_LENGTH as usize) / 2)
    }
}

impl WireFormat for TrafficSelectorSubstructure {
    fn encoding_table() -> EncodingTable<Self> {
        ENCODING_RULES
    }

    fn to_bytes(&self) -> Bytes {
        let bytes = encode(self, Self::encoding_table());
        debug_assert_eq!(bytes.len(), self.payload_length as usize);
        bytes
    }

    /// Parse a substructure from wire bytes.
    ///
    /// Address field widths depend on the selector type, so octet 0 is
    /// inspected first and both receiving buffers are pre-sized before
    /// the table-driven engine takes over.
    fn from_bytes(src: &[u8]) -> ParseResult<Self> {
        let ts_type = src.first().copied().ok_or(ParseError::Truncated {
            field: "selector type",
            needed: 1,
            remaining: 0,
        })?;
        let addr_len = Self::address_len_for(src, ts_type)?;

        let mut payload = Self {
            start_address: vec![0; addr_len],
            end_address: vec![0; addr_len],
            ..Self::default()
        };
        decode_into(&mut payload, src, Self::encoding_table())?;
        Ok(payload)
    }
}

impl Payload for TrafficSelectorSubstructure {
    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::TrafficSelectorSubstructure
    }

    fn next_kind(&self) -> PayloadKind {
        // Substructures are nested inside a parent traffic selector
        // payload and never chain on their own.
        PayloadKind::None
    }

    fn set_next_kind(&mut self, _kind: PayloadKind) {}

    fn wire_length(&self) -> u16 {
        self.payload_length
    }

    fn validate(&self) -> ValidationResult {
        if self.start_port > self.end_port {
            return Err(ValidationError::PortRangeInverted {
                start: self.start_port,
                end: self.end_port,
            });
        }
        match TsType::from_u8(self.ts_type) {
            Some(TsType::Ipv4AddrRange) => {
                for address in [&self.start_address, &self.end_address] {
                    if address.len() != IPV4_ADDRESS_LENGTH {
                        return Err(ValidationError::AddressLengthMismatch {
                            expected: IPV4_ADDRESS_LENGTH,
                            actual: address.len(),
                        });
                    }
                }
                Ok(())
            }
            // v6 selectors are defined on the wire but not implemented
            _ => Err(ValidationError::UnsupportedSelectorType(self.ts_type)),
        }
    }
}
