//! Base types shared between the demuxer, the identifier and the reporter.

mod packet;
pub use packet::*;
