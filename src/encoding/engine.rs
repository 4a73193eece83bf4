//! # Generic Codec Engine
//!
//! Walks an [`EncodingTable`] in wire order to serialize a payload into
//! bytes or to populate an instance from incoming bytes.
//!
//! The engine is generic over the payload type: all knowledge of the
//! wire layout lives in the rule table, all knowledge of the struct
//! members lives in the accessors bound into each rule. Multi-byte
//! integers are network byte order throughout.
//!
//! ## Length Bounding
//! A `PayloadLength` rule records the total length the payload declares
//! on the wire. Once recorded, no later rule may consume bytes past that
//! bound (trailing input may belong to the next payload in the message),
//! and the parse must account for exactly the declared total —
//! anything else is a [`ParseError::LengthMismatch`].

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::encoding::rules::{fixed_len, EncodingTable, FieldRule};
use crate::error::{ParseError, ParseResult};

/// Serialize a payload into its wire representation.
///
/// Iterates the table in order, appending each field in network byte
/// order. The `PayloadLength` field is written from the payload's own
/// stored length, which callers compute ahead of time; address fields
/// are appended raw, with no per-field length prefix.
pub fn encode<P>(payload: &P, table: EncodingTable<P>) -> Bytes {
    let variable: usize = table
        .iter()
        .filter_map(|rule| match rule {
            FieldRule::Address { get, .. } => Some(get(payload).len()),
            _ => None,
        })
        .sum();
    let mut buf = BytesMut::with_capacity(fixed_len(table) + variable);

    for rule in table {
        match rule {
            FieldRule::SelectorType { get, .. } | FieldRule::U8 { get, .. } => {
                buf.put_u8(get(payload));
            }
            FieldRule::PayloadLength { get, .. } | FieldRule::U16 { get, .. } => {
                buf.put_u16(get(payload));
            }
            FieldRule::Address { get, .. } => {
                buf.put_slice(get(payload));
            }
        }
    }

    trace!(bytes = buf.len(), "encoded payload");
    buf.freeze()
}

/// Parse wire bytes into an existing payload instance.
///
/// Iterates the table in order, consuming the exact width of each fixed
/// field. An `Address` rule consumes as many bytes as its receiving
/// buffer currently holds, so callers must pre-size variable buffers
/// (typically from a discriminant field) before delegating here.
///
/// # Errors
/// [`ParseError::Truncated`] when the input runs out mid-field;
/// [`ParseError::LengthMismatch`] when the declared total length
/// disagrees with the widths the rules consume.
pub fn decode_into<P>(payload: &mut P, src: &[u8], table: EncodingTable<P>) -> ParseResult<()> {
    let mut consumed = 0usize;
    let mut declared: Option<u16> = None;

    for rule in table {
        let width = match rule {
            FieldRule::Address { get, .. } => get(payload).len(),
            // fixed_width is Some for every non-address kind
            _ => rule.fixed_width().unwrap_or(0),
        };

        take(src, consumed, width, rule.name(), declared)?;

        match rule {
            FieldRule::SelectorType { set, .. } | FieldRule::U8 { set, .. } => {
                set(payload, src[consumed]);
            }
            FieldRule::PayloadLength { set, .. } => {
                let value = u16::from_be_bytes([src[consumed], src[consumed + 1]]);
                set(payload, value);
                declared = Some(value);
            }
            FieldRule::U16 { set, .. } => {
                set(payload, u16::from_be_bytes([src[consumed], src[consumed + 1]]));
            }
            FieldRule::Address { set, .. } => {
                set(payload, src[consumed..consumed + width].to_vec());
            }
        }
        consumed += width;
    }

    if let Some(total) = declared {
        if consumed != total as usize {
            debug!(declared = total, consumed, "payload length mismatch");
            return Err(ParseError::LengthMismatch {
                declared: total,
                consumed,
            });
        }
    }

    trace!(bytes = consumed, "decoded payload");
    Ok(())
}

/// Parse wire bytes into a default-constructed payload instance.
///
/// Only suitable for payload kinds whose variable buffers need no
/// pre-sizing; kinds with discriminant-dependent widths wrap
/// [`decode_into`] behind their own constructor instead.
pub fn decode<P: Default>(src: &[u8], table: EncodingTable<P>) -> ParseResult<P> {
    let mut payload = P::default();
    decode_into(&mut payload, src, table)?;
    Ok(payload)
}

/// Bounds-check the next `width` bytes at `consumed`.
fn take(
    src: &[u8],
    consumed: usize,
    width: usize,
    field: &'static str,
    declared: Option<u16>,
) -> ParseResult<()> {
    if let Some(total) = declared {
        // Bytes past the declared total belong to the next payload.
        if consumed + width > total as usize {
            return Err(ParseError::LengthMismatch {
                declared: total,
                consumed: consumed + width,
            });
        }
    }
    if consumed + width > src.len() {
        return Err(ParseError::Truncated {
            field,
            needed: width,
            remaining: src.len() - consumed,
        });
    }
    Ok(())
}
