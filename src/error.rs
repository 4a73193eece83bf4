//! # Error Types
//!
//! Error handling for payload parsing and validation.
//!
//! This module defines the two failure classes of the codec:
//!
//! - **Parse errors**: the wire bytes cannot be mapped onto a payload
//!   (truncated input, inconsistent declared length). Fatal to the single
//!   parse attempt; the message assembler decides whether to drop the
//!   whole message.
//! - **Validation errors**: the bytes parsed, but the resulting payload
//!   violates a structural rule and must not be used to build policy.
//!
//! There is no exception-style control flow: every operation either
//! succeeds or reports exactly one classified failure. Mutations and
//! drops never fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure while mapping wire bytes onto a payload instance.
///
/// Serializes for diagnostics; the borrowed field name keeps this
/// one-way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// Fewer bytes remain in the input than the next encoding rule
    /// requires.
    #[error("truncated input: {field} needs {needed} byte(s), {remaining} remaining")]
    Truncated {
        /// Wire field the codec was consuming when the input ran out.
        field: &'static str,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes actually left in the input.
        remaining: usize,
    },

    /// The declared total payload length disagrees with the bytes the
    /// rule table actually accounts for.
    #[error("declared length {declared} disagrees with {consumed} consumed byte(s)")]
    LengthMismatch {
        /// Total length the payload declared on the wire.
        declared: u16,
        /// Bytes the encoding rules consumed (or required).
        consumed: usize,
    },
}

/// Structural rule violated by an otherwise well-formed payload.
///
/// Returned by [`Payload::validate`](crate::payloads::Payload::validate).
/// A payload that fails validation must be rejected by the caller, never
/// silently used.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The selector's start port is greater than its end port.
    #[error("start port {start} exceeds end port {end}")]
    PortRangeInverted {
        /// Start of the port range.
        start: u16,
        /// End of the port range.
        end: u16,
    },

    /// An address buffer does not have the width the selector type
    /// requires.
    #[error("address is {actual} byte(s), selector type requires {expected}")]
    AddressLengthMismatch {
        /// Width required by the selector type.
        expected: usize,
        /// Width of the offending buffer.
        actual: usize,
    },

    /// The selector type is not implemented by this version.
    #[error("unsupported traffic selector type {0}")]
    UnsupportedSelectorType(u8),
}

/// Type alias for parse results.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Type alias for validation results.
pub type ValidationResult = std::result::Result<(), ValidationError>;
