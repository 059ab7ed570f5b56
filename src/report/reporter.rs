use super::state::RunState;
use crate::av::Packet;
use crate::codec::StreamIdentifier;
use crate::error::Result;
use futures::{pin_mut, Stream, TryStreamExt};
use std::fmt;
use std::io::Write;

/// Shown in place of a type label for a serial that never had a BOS packet
pub const ABSENT_LABEL: &str = "(absent)";

/// Hex form of a serial, `none` before any stream became current
struct SerialHex(Option<u32>);

impl fmt::Display for SerialHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(serial) => write!(f, "{:x}", serial),
            None => f.write_str("none"),
        }
    }
}

/// Writes a line-oriented summary of the logical streams in a packet
/// sequence.
///
/// Boundaries are reported as they are seen: a BOS packet announces a new
/// stream and its detected type, an EOS packet flushes the mid-stream count
/// and announces the end, and a mid-stream packet from a different serial
/// than the current one reports the count accumulated so far for the
/// previous serial. Nothing is reported when the sequence simply ends.
pub struct StreamReporter<I: StreamIdentifier> {
    identifier: I,
    state: RunState,
}

impl<I: StreamIdentifier> StreamReporter<I> {
    pub fn new(identifier: I) -> Self {
        Self {
            identifier,
            state: RunState::new(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Consumes `packets` to exhaustion, writing report lines to `out`.
    ///
    /// The first error pulled from the stream is returned as is; lines
    /// written before it stay written.
    pub async fn report<S, W>(&mut self, packets: S, out: &mut W) -> Result<()>
    where
        S: Stream<Item = Result<Packet>>,
        W: Write,
    {
        pin_mut!(packets);
        while let Some(packet) = packets.try_next().await? {
            self.observe(&packet, out)?;
        }
        Ok(())
    }

    /// Processes a single packet.
    pub fn observe<W: Write>(&mut self, packet: &Packet, out: &mut W) -> Result<()> {
        let serial = packet.serial;

        // BOS wins over EOS when a packet carries both
        if packet.is_bos {
            let stream_type = self.identifier.identify(packet);
            let ordinal = self.state.begin_stream(serial, stream_type.description);

            writeln!(out)?;
            // Decimal form is the signed 32-bit reading of the serial
            writeln!(
                out,
                "New logical stream #{}, serial: {:x} ({})",
                ordinal, serial, serial as i32
            )?;
            writeln!(
                out,
                "\t{} detected ({})",
                stream_type.description, stream_type.mime_type
            )?;
        } else if packet.is_eos {
            let pending = self.state.take_pending();
            if pending > 0 {
                writeln!(out, "({} mid-stream packets of {:x})", pending, serial)?;
            }
            let label = self.state.label(serial).unwrap_or(ABSENT_LABEL);
            writeln!(out, "Stream {:x} of {} ended", serial, label)?;
        } else if self.state.current_serial() != Some(serial) {
            let (previous, pending) = self.state.switch_to(serial);
            writeln!(
                out,
                "({} packets of stream {})",
                pending,
                SerialHex(previous)
            )?;
        } else {
            self.state.count();
        }

        Ok(())
    }
}
