//! Protocol module - frame layer and argument tagging.
//!
//! Two pure codec layers stack here:
//! - [`wire`] packs an ordered sequence of opaque byte strings into a
//!   single buffer and back, independent of argument typing.
//! - [`tag`] maps one typed argument to its tagged byte string and
//!   back, one frame field per argument.

pub mod tag;
pub mod wire;
