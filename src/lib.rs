//! # amp-message
//!
//! Typed-argument messages for the AMP wire protocol.
//!
//! A [`Message`] is an ordered, mutable sequence of typed [`Arg`]s
//! (text, blob, or JSON) that serializes to a single byte buffer and
//! back. Each argument is tagged with a minimal 2-byte variant prefix
//! (or none for blobs), and the tagged fields are packed by a
//! length-prefixed frame layer.
//!
//! ## Architecture
//!
//! - [`protocol::wire`]: frame layer - ordered opaque byte strings in
//!   one buffer
//! - [`protocol::tag`]: tag codec - typed argument to tagged field and
//!   back
//! - [`Message`]: list operations plus buffer (de)serialization on top
//!   of both
//!
//! ## Example
//!
//! ```
//! use amp_message::{Arg, Message};
//!
//! let mut msg = Message::new();
//! msg.push_text("user.created");
//! msg.push_json(&serde_json::json!({"id": 42})).unwrap();
//! msg.push_blob(&b"\x00\x01"[..]);
//!
//! let buf = msg.to_buffer().unwrap();
//! let decoded = Message::from_buffer(&buf).unwrap();
//! assert_eq!(decoded, msg);
//! ```

pub mod error;
pub mod protocol;

mod arg;
mod message;

pub use arg::Arg;
pub use error::{AmpError, Result};
pub use message::Message;
