//! # Payload Contract
//!
//! The uniform surface every concrete payload kind implements, letting a
//! message assembler compose heterogeneous payloads into one message
//! without knowing their internals.
//!
//! ## Components
//! - **[`PayloadKind`]**: symbolic identity of a payload kind, plus the
//!   chaining sentinel [`PayloadKind::None`].
//! - **[`Payload`]**: object-safe contract (identity, chaining pointer,
//!   wire length, structural validation). Owned buffers are released by
//!   `Drop`; there is no separate release call to forget.
//! - **[`WireFormat`]**: the codec side of the contract, exposing a
//!   payload kind's encoding table to the generic engine.

pub mod traffic_selector;

use serde::{Deserialize, Serialize};

use crate::encoding::rules::EncodingTable;
use crate::encoding::{decode_into, encode};
use crate::error::{ParseResult, ValidationResult};

pub use traffic_selector::{TrafficSelectorSubstructure, TsType};

/// Symbolic identity of a payload kind within a message chain.
///
/// Numeric wire codes are assigned by the enclosing protocol registry;
/// this enum only carries identity and the chaining sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Sentinel: no payload follows in the chain.
    #[default]
    None,
    /// Traffic selector substructure, nested inside a parent traffic
    /// selector payload.
    TrafficSelectorSubstructure,
}

impl PayloadKind {
    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            PayloadKind::None => "NONE",
            PayloadKind::TrafficSelectorSubstructure => "TRAFFIC_SELECTOR_SUBSTRUCTURE",
        }
    }
}

/// Uniform operations of a concrete payload kind.
///
/// The message assembler holds `dyn Payload` instances chained via
/// [`next_kind`](Payload::next_kind) and treats them polymorphically; a
/// payload that fails [`validate`](Payload::validate) must not be used
/// to build policy.
pub trait Payload {
    /// The kind constant of this payload.
    fn payload_kind(&self) -> PayloadKind;

    /// Kind of the payload chained after this one.
    ///
    /// Substructures are nested inside a parent payload and have no
    /// independent successor; they report [`PayloadKind::None`].
    fn next_kind(&self) -> PayloadKind;

    /// Update the chaining pointer.
    ///
    /// A no-op for substructures, which never chain.
    fn set_next_kind(&mut self, kind: PayloadKind);

    /// Total wire length of this payload in bytes.
    fn wire_length(&self) -> u16;

    /// Check the structural rules of this payload kind.
    fn validate(&self) -> ValidationResult;
}

/// Codec surface of a payload kind: its wire schema and the default
/// byte-level entry points.
pub trait WireFormat: Sized + 'static {
    /// The encoding rule table shared by all instances of this kind.
    fn encoding_table() -> EncodingTable<Self>;

    /// Serialize into wire bytes via the generic engine.
    fn to_bytes(&self) -> bytes::Bytes {
        encode(self, Self::encoding_table())
    }

    /// Parse wire bytes into a new instance.
    ///
    /// The default delegates straight to the engine with a
    /// default-constructed instance; kinds with discriminant-dependent
    /// field widths override this to pre-size their buffers first.
    fn from_bytes(src: &[u8]) -> ParseResult<Self>
    where
        Self: Default,
    {
        let mut payload = Self::default();
        decode_into(&mut payload, src, Self::encoding_table())?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(PayloadKind::None.name(), "NONE");
        assert_eq!(
            PayloadKind::TrafficSelectorSubstructure.name(),
            "TRAFFIC_SELECTOR_SUBSTRUCTURE"
        );
    }

    #[test]
    fn test_default_kind_is_chain_end() {
        assert_eq!(PayloadKind::default(), PayloadKind::None);
    }
}
