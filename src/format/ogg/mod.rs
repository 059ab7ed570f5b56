//! # Ogg container support
//!
//! Read-side implementation of the Ogg framing (RFC 3533):
//!
//! - page header parsing and CRC verification
//! - packet reassembly from lacing values, across page boundaries
//! - interleaved logical streams, told apart by their serial number
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ogginfo::format::{Demuxer, OggDemuxer};
//! use tokio::fs::File;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("audio.ogg").await?;
//! let mut demuxer = OggDemuxer::new(file);
//!
//! while let Some(packet) = demuxer.read_packet().await? {
//!     println!("stream {:x}: {} bytes", packet.serial, packet.data.len());
//! }
//! # Ok(())
//! # }
//! ```

/// Ogg demuxer producing packets from pages
pub mod demuxer;

/// Low-level page parsing utilities
pub mod parser;

/// Core Ogg types and constants
pub mod types;


pub use demuxer::OggDemuxer;
pub use parser::OggPageParser;
pub use types::{
    OggPage, OggPageHeader, PacketSpan, CAPTURE_PATTERN, CRC_OFFSET, FLAG_BOS, FLAG_CONTINUED,
    FLAG_EOS, OGG_VERSION, PAGE_HEADER_SIZE,
};
