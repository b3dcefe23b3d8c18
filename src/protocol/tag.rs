//! Tag codec - variant prefixes for typed arguments.
//!
//! Each argument travels as one frame field, tagged by variant:
//!
//! - Text: `s:` prefix (bytes `0x73 0x3A`)
//! - JSON: `j:` prefix (bytes `0x6A 0x3A`)
//! - Blob: no prefix, payload bytes pass through unchanged
//!
//! Tagging is positional and minimal - 0 or 2 bytes of overhead per
//! argument. Blob is the untagged fallback so arbitrary binary
//! payloads round-trip byte-for-byte without escaping.

use bytes::{BufMut, Bytes, BytesMut};

use crate::arg::Arg;
use crate::error::{AmpError, Result};

/// Wire prefix for Text arguments (`s:`).
pub const STRING_PREFIX: [u8; 2] = *b"s:";

/// Wire prefix for JSON arguments (`j:`).
pub const JSON_PREFIX: [u8; 2] = *b"j:";

/// Wire form of an absent argument: the JSON literal `null`, tagged.
pub const NULL_ARG: &[u8] = b"j:null";

/// Pack one argument into its tagged wire form.
///
/// `None` stands for an absent value at an encoding position and packs
/// as [`NULL_ARG`]. An absent value is never stored in a message, so
/// unpacking can't produce it back.
///
/// # Example
///
/// ```
/// use amp_message::protocol::tag;
/// use amp_message::Arg;
///
/// assert_eq!(&tag::pack(Some(&Arg::text("bar")))[..], b"s:bar");
/// assert_eq!(&tag::pack(Some(&Arg::blob(&b"bar"[..])))[..], b"bar");
/// assert_eq!(&tag::pack(None)[..], b"j:null");
/// ```
pub fn pack(arg: Option<&Arg>) -> Bytes {
    let Some(arg) = arg else {
        return Bytes::from_static(NULL_ARG);
    };

    match arg {
        Arg::Blob(payload) => payload.clone(),
        Arg::Text(payload) => tagged(STRING_PREFIX, payload),
        // Anything that is neither a blob nor plain text goes out
        // JSON-tagged. Json lands here, and so would any variant
        // added later.
        other => tagged(JSON_PREFIX, other.payload()),
    }
}

fn tagged(prefix: [u8; 2], payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(prefix.len() + payload.len());
    buf.put_slice(&prefix);
    buf.put_slice(payload);
    buf.freeze()
}

/// Unpack one tagged frame field back into an argument.
///
/// A `j:` prefix yields a JSON argument, `s:` a Text argument, and
/// anything else is taken whole as a Blob. Prefix stripping is
/// zero-copy via `Bytes::slice`.
///
/// # Errors
///
/// Returns `AmpError::Decode` for a zero-length field, or for a
/// one-byte field that is the first half of a recognized prefix
/// (`j` or `s`) - both can only come from a malformed frame. Any
/// other one-byte field is a valid Blob.
pub fn unpack(field: &Bytes) -> Result<Arg> {
    if field.is_empty() {
        return Err(AmpError::Decode("empty tagged element".to_string()));
    }

    if field.len() == 1 {
        return match field[0] {
            b'j' | b's' => Err(AmpError::Decode(
                "tagged element truncated inside its prefix".to_string(),
            )),
            _ => Ok(Arg::Blob(field.clone())),
        };
    }

    match [field[0], field[1]] {
        JSON_PREFIX => Ok(Arg::Json(field.slice(2..))),
        STRING_PREFIX => Ok(Arg::Text(field.slice(2..))),
        _ => Ok(Arg::Blob(field.clone())),
    }
}
