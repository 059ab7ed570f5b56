//! Content identification for Ogg logical streams.
//!
//! Ogg does not record what a logical stream carries; every codec mapping
//! instead starts its BOS packet with a fixed magic. [`OggStreamIdentifier`]
//! matches those magics and reports a label plus a media type.

use crate::av::Packet;

/// Magic-byte based identifier
pub mod identify;

/// Known stream types and their media types
pub mod types;

pub use identify::OggStreamIdentifier;
pub use types::{OggStreamType, StreamKind};

/// Classifies a logical stream from its beginning-of-stream packet
pub trait StreamIdentifier {
    /// Must be pure: the reporter may call it any number of times.
    fn identify(&self, packet: &Packet) -> OggStreamType;
}
