//! # ike-payload-codec
//!
//! Declarative, table-driven wire codec for security-association
//! negotiation payload fragments.
//!
//! Each payload kind declares its wire layout once as an ordered table
//! of encoding rules; a generic engine walks the table to serialize or
//! parse instances, and a uniform payload contract (identity, chaining
//! pointer, wire length, validation) lets a message assembler compose
//! heterogeneous payloads without knowing their internals. The traffic
//! selector substructure is the concrete payload kind shipped here.
//!
//! ## Modules
//! - **[`encoding`]**: encoding rule tables and the generic codec engine
//! - **[`payloads`]**: the payload contract and the traffic selector
//!   substructure
//! - **[`host`]**: structured endpoint values payloads convert to/from
//! - **[`error`]**: parse and validation error taxonomy
//!
//! ## Example
//! ```rust
//! use ike_payload_codec::host::Host;
//! use ike_payload_codec::payloads::{Payload, TrafficSelectorSubstructure, WireFormat};
//! use std::net::Ipv4Addr;
//!
//! let mut ts = TrafficSelectorSubstructure::new();
//! ts.set_protocol_id(6);
//! ts.set_start_host(&Host::from_ipv4(Ipv4Addr::new(10, 0, 0, 1), 1024));
//! ts.set_end_host(&Host::from_ipv4(Ipv4Addr::new(10, 0, 0, 255), 65535));
//! assert!(ts.validate().is_ok());
//!
//! let bytes = ts.to_bytes();
//! assert_eq!(bytes.len() as u16, ts.wire_length());
//!
//! let parsed = TrafficSelectorSubstructure::from_bytes(&bytes).unwrap();
//! assert_eq!(parsed, ts);
//! ```
//!
//! ## Scope
//! Transport I/O, the security-association state machine, key exchange
//! and message-level payload chaining live outside this crate; only the
//! codec core and the payload contract they consume are defined here.

pub mod encoding;
pub mod error;
pub mod host;
pub mod payloads;

// Re-export the types most callers touch
pub use error::{ParseError, ValidationError};
pub use host::{AddressFamily, Host};
pub use payloads::{Payload, PayloadKind, TrafficSelectorSubstructure, TsType, WireFormat};
