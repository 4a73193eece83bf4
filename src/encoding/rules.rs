//! # Encoding Rules
//!
//! The schema language of the codec: one [`FieldRule`] per wire field,
//! collected into an ordered [`EncodingTable`] per payload kind.
//!
//! A rule fuses the field's wire kind (width and codec behavior) with a
//! typed getter/setter pair referencing a member of the owning payload.
//! Tables are `'static` constants defined once per payload kind and
//! shared by every instance; they carry no mutable state.

/// A single wire field of a payload: kind plus the accessor pair that
/// reads and writes the backing struct member.
///
/// Accessors are plain function pointers so a table can live in a
/// `'static` constant.
pub enum FieldRule<P> {
    /// Traffic selector type discriminant, one octet.
    SelectorType {
        /// Read the discriminant from the payload.
        get: fn(&P) -> u8,
        /// Write the discriminant into the payload.
        set: fn(&mut P, u8),
    },

    /// Fixed-width field, one octet.
    U8 {
        /// Read the octet from the payload.
        get: fn(&P) -> u8,
        /// Write the octet into the payload.
        set: fn(&mut P, u8),
    },

    /// Total wire length of the payload, two octets network order.
    ///
    /// On encode this writes the payload's stored length (computed
    /// beforehand, not measured during the pass). On decode the value
    /// bounds the remainder of the parse.
    PayloadLength {
        /// Read the stored wire length.
        get: fn(&P) -> u16,
        /// Write the decoded wire length.
        set: fn(&mut P, u16),
    },

    /// Fixed-width field, two octets network order.
    U16 {
        /// Read the value from the payload.
        get: fn(&P) -> u16,
        /// Write the value into the payload.
        set: fn(&mut P, u16),
    },

    /// Variable-width address buffer.
    ///
    /// Encodes as the buffer's raw bytes with no length prefix of its
    /// own. On decode the field consumes exactly as many bytes as the
    /// receiving buffer currently holds, so the caller must pre-size the
    /// buffer before delegating to the engine.
    Address {
        /// Borrow the address buffer from the payload.
        get: fn(&P) -> &[u8],
        /// Replace the address buffer, dropping the previous one.
        set: fn(&mut P, Vec<u8>),
    },
}

impl<P> FieldRule<P> {
    /// Wire width in bytes, or `None` for variable-width fields.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            FieldRule::SelectorType { .. } | FieldRule::U8 { .. } => Some(1),
            FieldRule::PayloadLength { .. } | FieldRule::U16 { .. } => Some(2),
            FieldRule::Address { .. } => None,
        }
    }

    /// Field kind name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FieldRule::SelectorType { .. } => "selector type",
            FieldRule::U8 { .. } => "u8",
            FieldRule::PayloadLength { .. } => "payload length",
            FieldRule::U16 { .. } => "u16",
            FieldRule::Address { .. } => "address",
        }
    }
}

/// Ordered wire schema of a payload kind, in wire order.
pub type EncodingTable<P> = &'static [FieldRule<P>];

/// Sum of the fixed-width fields of a table, in bytes.
///
/// Together with the variable buffer lengths at encode time this must
/// equal the payload's reported wire length.
pub fn fixed_len<P>(table: EncodingTable<P>) -> usize {
    table.iter().filter_map(FieldRule::fixed_width).sum()
}
