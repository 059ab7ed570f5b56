//! # Utility Functions and Types
//!
//! Helpers shared by the container code.
//!
//! ## CRC Calculation
//!
//! The crc module provides the CRC32 variant Ogg uses for page checksums:
//!
//! ```rust
//! use ogginfo::utils::Crc32Ogg;
//!
//! # fn main() {
//! let crc = Crc32Ogg::new();
//! println!("CRC32: {:08x}", crc.calculate(b"OggS"));
//! # }
//! ```

/// CRC calculation implementations
pub mod crc;

pub use crc::Crc32Ogg;
