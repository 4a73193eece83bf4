//! # Table-Driven Wire Encoding
//!
//! Declarative binary codec machinery shared by all payload kinds.
//!
//! Each payload kind declares its wire layout once, as an ordered
//! [`EncodingTable`](rules::EncodingTable) of [`FieldRule`](rules::FieldRule)s
//! binding a field kind to a typed accessor pair. The generic
//! [`engine`] walks a table in wire order to serialize a payload into
//! bytes or to populate an instance from incoming bytes, so payload
//! implementations never hand-roll their own byte plumbing.
//!
//! ## Wire Conventions
//! - All multi-byte integers are network byte order (big-endian).
//! - A `PayloadLength` field declares the payload's total wire size and
//!   bounds the remainder of a parse.
//! - Variable-width address fields carry no own length prefix; their
//!   width is implied by the receiving buffer's length.

pub mod engine;
pub mod rules;

pub use engine::{decode, decode_into, encode};
pub use rules::{EncodingTable, FieldRule};
