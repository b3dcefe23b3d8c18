//! Message - an ordered, mutable sequence of typed arguments.
//!
//! A [`Message`] is the unit of communication: arguments go in at
//! either end, and the whole sequence serializes to one buffer via the
//! tag and frame layers. Deserialization runs the same path in
//! reverse, all-or-nothing.
//!
//! # Example
//!
//! ```
//! use amp_message::{Arg, Message};
//!
//! let mut msg = Message::new();
//! msg.push_text("greet");
//! msg.push_json(&serde_json::json!({"name": "world"})).unwrap();
//!
//! let buf = msg.to_buffer().unwrap();
//! let decoded = Message::from_buffer(&buf).unwrap();
//! assert_eq!(decoded, msg);
//! ```

use std::collections::VecDeque;
use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::arg::Arg;
use crate::error::Result;
use crate::protocol::{tag, wire};

/// An ordered, insertion-order-preserving sequence of [`Arg`]s.
///
/// Duplicates and the empty sequence are legal. The message owns its
/// arguments exclusively; there is no internal synchronization, so
/// concurrent mutation must be prevented by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    args: VecDeque<Arg>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a message from an ordered sequence of arguments.
    pub fn from_args(args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }

    /// Decode a message from an encoded buffer.
    ///
    /// Runs the frame layer, then unpacks each field in its original
    /// order. All-or-nothing: any codec failure discards partial
    /// results.
    ///
    /// # Errors
    ///
    /// Returns `AmpError::Decode` if the frame buffer or any tagged
    /// field is malformed.
    pub fn from_buffer(buf: &[u8]) -> Result<Self> {
        let fields = wire::decode(buf)?;
        let args = fields
            .iter()
            .map(tag::unpack)
            .collect::<Result<VecDeque<Arg>>>()?;
        Ok(Self { args })
    }

    /// Append an argument at the tail.
    pub fn push(&mut self, arg: Arg) -> &mut Self {
        self.args.push_back(arg);
        self
    }

    /// Remove and return the tail argument, or `None` if empty.
    pub fn pop(&mut self) -> Option<Arg> {
        self.args.pop_back()
    }

    /// Remove and return the head argument, or `None` if empty.
    pub fn shift(&mut self) -> Option<Arg> {
        self.args.pop_front()
    }

    /// Prepend an argument at the head.
    pub fn unshift(&mut self, arg: Arg) -> &mut Self {
        self.args.push_front(arg);
        self
    }

    /// Append a Text argument at the tail.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Arg::text(text))
    }

    /// Append a Blob argument at the tail.
    pub fn push_blob(&mut self, data: impl Into<Bytes>) -> &mut Self {
        self.push(Arg::blob(data))
    }

    /// Serialize `value` as JSON and append it at the tail.
    ///
    /// # Errors
    ///
    /// Returns `AmpError::Encode` if the value cannot be serialized.
    pub fn push_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        let arg = Arg::json(value)?;
        Ok(self.push(arg))
    }

    /// Encode the message into a single buffer.
    ///
    /// Packs every argument in order, then frames the tagged fields.
    /// An empty message encodes to the 1-byte empty frame.
    ///
    /// # Errors
    ///
    /// Returns `AmpError::ArgOverflow` if the message holds more
    /// arguments than one frame can carry.
    pub fn to_buffer(&self) -> Result<Bytes> {
        let fields: Vec<Bytes> = self.args.iter().map(|arg| tag::pack(Some(arg))).collect();
        wire::encode(&fields)
    }

    /// Get the number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if the message has no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over the arguments in order.
    pub fn args(&self) -> impl Iterator<Item = &Arg> {
        self.args.iter()
    }

    /// Produce a diagnostic string with argument count and encoded
    /// size.
    ///
    /// Debugging output only - the format carries no parse contract.
    /// A message that cannot be encoded reports `size=0`.
    pub fn inspect(&self) -> String {
        let size = self.to_buffer().map(|buf| buf.len()).unwrap_or(0);
        format!("<Message args={} size={}>", self.args.len(), size)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl FromIterator<Arg> for Message {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self::from_args(iter)
    }
}

impl Extend<Arg> for Message {
    fn extend<I: IntoIterator<Item = Arg>>(&mut self, iter: I) {
        self.args.extend(iter);
    }
}
