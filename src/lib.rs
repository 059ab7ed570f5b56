#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::missing_crate_level_docs)]

//! # ogginfo - Ogg logical stream inspector
//!
//! `ogginfo` reads Ogg container files and reports the logical streams they
//! carry: how many there are, their serial numbers, what they contain and
//! how many packets each contributed between boundaries. It is a bit more
//! low level than tools like `ogginfo` from vorbis-tools or `oggz-info`.
//!
//! ## Features
//!
//! - Ogg page parsing with CRC verification and resynchronisation
//! - Packet reassembly across pages for interleaved logical streams
//! - Content identification for Vorbis, Opus, Theora, FLAC, Speex,
//!   Skeleton, Kate and more
//! - Boundary report with per-stream packet counts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ogginfo::config::Config;
//! use ogginfo::report::inspect_file;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut out = std::io::stdout();
//!     inspect_file(Path::new("music.ogg"), &Config::default(), &mut out).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - `format`: the Ogg demuxer and the [`format::Demuxer`] trait
//! - `codec`: stream content identification
//! - `report`: the stream reporter and its run state
//! - `av`: the packet type shared by the above
//! - `config`, `error`, `utils`: configuration, errors, CRC

/// Packet type
pub mod av;

/// Stream content identification
pub mod codec;

/// Error types and utilities
pub mod error;

/// Container demuxing
pub mod format;

/// Logical stream reporting
pub mod report;

/// Common utilities and helper functions
pub mod utils;

/// Configuration module
pub mod config;

pub use error::{OggError, Result};
