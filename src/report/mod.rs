//! # Logical stream report
//!
//! Turns the packet sequence of one Ogg file into a short textual summary:
//!
//! ```text
//! Processing file "example.ogg"
//!
//! New logical stream #1, serial: 4a3f (19007)
//! 	Vorbis detected (audio/vorbis)
//! (118 mid-stream packets of 4a3f)
//! Stream 4a3f of Vorbis ended
//! ```

/// Boundary tracking and line formatting
pub mod reporter;

/// Per-file run state
pub mod state;

pub use reporter::{StreamReporter, ABSENT_LABEL};
pub use state::RunState;

use crate::codec::OggStreamIdentifier;
use crate::config::Config;
use crate::error::{OggError, Result};
use crate::format::{packets, OggDemuxer};
use std::io::Write;
use std::path::Path;
use tokio::fs::File;

/// Reports on one file, starting from a fresh run state.
///
/// A missing file fails before anything is written.
pub async fn inspect_file<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<()> {
    if !path.exists() {
        return Err(OggError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).await?;

    writeln!(out, "Processing file \"{}\"", path.display())?;

    let demuxer = OggDemuxer::with_config(file, config);
    let mut reporter = StreamReporter::new(OggStreamIdentifier::new());
    reporter.report(packets(demuxer), out).await?;

    log::debug!(
        "{}: {} logical streams",
        path.display(),
        reporter.state().streams_seen()
    );
    Ok(())
}
