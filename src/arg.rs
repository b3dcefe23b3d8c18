//! Typed message arguments.
//!
//! An [`Arg`] is one immutable payload element within a message. The
//! variant decides the wire tag; the payload is raw bytes either way.
//! Payloads are held as `bytes::Bytes`, so cloning an argument or
//! sharing it across readers is cheap and never copies.

use std::fmt;
use std::str;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AmpError, Result};

/// One typed argument in a message.
///
/// Variant identity alone determines wire tagging; the payload content
/// is never inspected. A Json argument holds the bytes of an
/// already-serialized JSON document - decoding never re-parses or
/// re-serializes it, so byte equality is preserved across round trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Raw text bytes, tagged `s:` on the wire.
    Text(Bytes),
    /// Opaque binary bytes, written untagged.
    Blob(Bytes),
    /// A serialized JSON document, tagged `j:`.
    Json(Bytes),
}

impl Arg {
    /// Create a Text argument from a string.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(Bytes::from(text.into().into_bytes()))
    }

    /// Create a Blob argument wrapping the given bytes unchanged.
    pub fn blob(data: impl Into<Bytes>) -> Self {
        Self::Blob(data.into())
    }

    /// Create a JSON argument by serializing `value`.
    ///
    /// # Errors
    ///
    /// Returns `AmpError::Encode` if the value cannot be serialized
    /// (e.g. a map with non-string keys).
    ///
    /// # Example
    ///
    /// ```
    /// use amp_message::Arg;
    ///
    /// let arg = Arg::json(&serde_json::json!({"id": 7})).unwrap();
    /// assert_eq!(arg.payload(), br#"{"id":7}"#);
    /// ```
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let buf = serde_json::to_vec(value)?;
        Ok(Self::Json(Bytes::from(buf)))
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Text(b) | Self::Blob(b) | Self::Json(b) => b,
        }
    }

    /// Get a clone of the payload as Bytes (cheap, zero-copy).
    #[inline]
    pub fn payload_bytes(&self) -> Bytes {
        match self {
            Self::Text(b) | Self::Blob(b) | Self::Json(b) => b.clone(),
        }
    }

    /// Get the payload length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.payload().len()
    }

    /// Check if the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }

    /// Check if this is a Text argument.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is a Blob argument.
    #[inline]
    pub fn is_blob(&self) -> bool {
        matches!(self, Self::Blob(_))
    }

    /// Check if this is a JSON argument.
    #[inline]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// View the payload as UTF-8 text.
    ///
    /// Returns `None` if the payload is not valid UTF-8. Works on any
    /// variant, though Text is the usual caller.
    pub fn as_text(&self) -> Option<&str> {
        str::from_utf8(self.payload()).ok()
    }

    /// Parse the payload as JSON into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `AmpError::Decode` if the payload is not valid JSON for
    /// type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use amp_message::Arg;
    ///
    /// let arg = Arg::json(&vec![1, 2, 3]).unwrap();
    /// let back: Vec<i32> = arg.json_value().unwrap();
    /// assert_eq!(back, vec![1, 2, 3]);
    /// ```
    pub fn json_value<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(self.payload())
            .map_err(|e| AmpError::Decode(format!("invalid JSON payload: {e}")))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Json(_) => "json",
        };
        write!(f, "<Arg {variant} len={}>", self.len())
    }
}
