//! Frame layer encoding and decoding.
//!
//! Packs an ordered sequence of opaque byte strings into a single
//! buffer and back. Layout:
//! ```text
//! ┌──────────────┬─────────────┬─────────┬─────┐
//! │ Version|Count│ Field 0 len │ Field 0 │ ... │
//! │ 1 byte       │ 4 bytes     │ N bytes │     │
//! │ hi/lo nibble │ uint32 BE   │         │     │
//! └──────────────┴─────────────┴─────────┴─────┘
//! ```
//!
//! The header byte carries the protocol version in the high nibble and
//! the field count in the low nibble, so a frame holds at most 15
//! fields. An empty sequence encodes to the header byte alone.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{AmpError, Result};

/// Wire protocol version (high nibble of the header byte).
pub const VERSION: u8 = 1;

/// Maximum fields per frame (the count nibble is 4 bits).
pub const MAX_FIELDS: usize = 15;

/// Size of each field's length prefix in bytes.
pub const FIELD_LEN_SIZE: usize = 4;

/// Encode an ordered sequence of fields into one frame buffer.
///
/// Deterministic and order-preserving. The empty sequence encodes to a
/// single header byte.
///
/// # Errors
///
/// Returns `AmpError::ArgOverflow` if the sequence exceeds
/// [`MAX_FIELDS`].
///
/// # Example
///
/// ```
/// use amp_message::protocol::wire;
///
/// let buf = wire::encode(&[]).unwrap();
/// assert_eq!(buf.len(), 1);
/// ```
pub fn encode(fields: &[Bytes]) -> Result<Bytes> {
    if fields.len() > MAX_FIELDS {
        return Err(AmpError::ArgOverflow {
            given: fields.len(),
            max: MAX_FIELDS,
        });
    }

    let total: usize = 1 + fields.iter().map(|f| FIELD_LEN_SIZE + f.len()).sum::<usize>();
    let mut buf = BytesMut::with_capacity(total);

    buf.put_u8(VERSION << 4 | fields.len() as u8);
    for field in fields {
        buf.put_u32(field.len() as u32);
        buf.put_slice(field);
    }

    Ok(buf.freeze())
}

/// Decode a frame buffer back into its ordered sequence of fields.
///
/// The left inverse of [`encode`] for any buffer it produced.
///
/// # Errors
///
/// Returns `AmpError::Decode` if the buffer is empty, carries an
/// unknown version nibble, is truncated inside a length prefix or a
/// field body, or has trailing bytes past the declared field count.
pub fn decode(buf: &[u8]) -> Result<Vec<Bytes>> {
    let (&meta, mut rest) = buf
        .split_first()
        .ok_or_else(|| AmpError::Decode("empty frame buffer".to_string()))?;

    let version = meta >> 4;
    if version != VERSION {
        return Err(AmpError::Decode(format!(
            "unsupported frame version {version}, expected {VERSION}"
        )));
    }

    let count = (meta & 0x0F) as usize;
    let mut fields = Vec::with_capacity(count);

    for i in 0..count {
        if rest.len() < FIELD_LEN_SIZE {
            return Err(AmpError::Decode(format!(
                "truncated length prefix for field {i}"
            )));
        }
        let len = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
        rest = &rest[FIELD_LEN_SIZE..];

        if rest.len() < len {
            return Err(AmpError::Decode(format!(
                "field {i} declares {len} bytes but only {} remain",
                rest.len()
            )));
        }
        fields.push(Bytes::copy_from_slice(&rest[..len]));
        rest = &rest[len..];
    }

    if !rest.is_empty() {
        return Err(AmpError::Decode(format!(
            "{} trailing bytes after {count} fields",
            rest.len()
        )));
    }

    Ok(fields)
}
