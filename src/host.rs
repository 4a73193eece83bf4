//! # Host Endpoints
//!
//! Structured network-endpoint values the payloads convert to and from
//! their raw wire buffers.
//!
//! A [`Host`] pairs an address (kept as raw bytes in wire form) with a
//! port. Hosts returned by payload accessors are freshly constructed and
//! independently owned; they never alias a payload's internal buffers.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Address family of a host endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressFamily {
    /// IPv4, 4-byte addresses.
    Ipv4,
    /// IPv6, 16-byte addresses.
    Ipv6,
}

impl AddressFamily {
    /// Address width in bytes for this family.
    pub fn address_len(self) -> usize {
        match self {
            AddressFamily::Ipv4 => 4,
            AddressFamily::Ipv6 => 16,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }
}

/// A network endpoint: address family, raw address bytes, and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    family: AddressFamily,
    address: Vec<u8>,
    port: u16,
}

impl Host {
    /// Create a host from raw address bytes in wire form.
    pub fn from_bytes(family: AddressFamily, address: impl Into<Vec<u8>>, port: u16) -> Self {
        Self {
            family,
            address: address.into(),
            port,
        }
    }

    /// Create an IPv4 host from a structured address.
    pub fn from_ipv4(addr: Ipv4Addr, port: u16) -> Self {
        Self::from_bytes(AddressFamily::Ipv4, addr.octets().to_vec(), port)
    }

    /// The address family.
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The raw address bytes, in wire (network) order.
    pub fn address_bytes(&self) -> &[u8] {
        &self.address
    }

    /// The port number.
    pub fn port(&self) -> u16 {
        self.port
    }
}
