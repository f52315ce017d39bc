//! Relay wire format: the snapshot payload and the envelope around it.
//! Transport is out of scope; these types only turn state into bytes and back.

mod envelope;
mod payload;

pub use envelope::*;
pub use payload::*;
