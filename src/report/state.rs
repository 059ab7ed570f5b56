use std::collections::HashMap;

/// Per-file bookkeeping of the stream reporter.
///
/// Created empty for every file and dropped once its packets are exhausted,
/// so nothing leaks from one file's report into the next.
#[derive(Debug, Default)]
pub struct RunState {
    /// Number of BOS packets seen, also the ordinal of the latest stream
    streams_seen: u32,
    /// Serial of the most recently active stream, `None` before the first
    current_serial: Option<u32>,
    /// Mid-stream packets counted since the last reported boundary
    pending: u64,
    /// Detected type label per serial, never pruned during a run
    labels: HashMap<u32, String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streams_seen(&self) -> u32 {
        self.streams_seen
    }

    pub fn current_serial(&self) -> Option<u32> {
        self.current_serial
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Label stored for `serial` by its BOS packet, if one was seen
    pub fn label(&self, serial: u32) -> Option<&str> {
        self.labels.get(&serial).map(String::as_str)
    }

    /// Registers a new logical stream and makes it current. Returns its
    /// ordinal.
    pub(crate) fn begin_stream(&mut self, serial: u32, label: &str) -> u32 {
        self.streams_seen += 1;
        self.current_serial = Some(serial);
        self.pending = 0;
        self.labels.insert(serial, label.to_string());
        self.streams_seen
    }

    /// Returns the pending count and resets it. The current serial is kept.
    pub(crate) fn take_pending(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }

    /// Makes `serial` current, returning the previous serial and its pending
    /// count.
    pub(crate) fn switch_to(&mut self, serial: u32) -> (Option<u32>, u64) {
        let previous = self.current_serial.replace(serial);
        (previous, self.take_pending())
    }

    /// Counts a mid-stream packet of the current serial.
    pub(crate) fn count(&mut self) {
        self.pending += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_stream_resets_pending() {
        let mut state = RunState::new();
        assert_eq!(state.begin_stream(10, "Vorbis"), 1);
        state.count();
        state.count();
        assert_eq!(state.pending(), 2);

        assert_eq!(state.begin_stream(11, "Theora"), 2);
        assert_eq!(state.pending(), 0);
        assert_eq!(state.current_serial(), Some(11));
        assert_eq!(state.label(10), Some("Vorbis"));
        assert_eq!(state.label(12), None);
    }

    #[test]
    fn test_switch_to() {
        let mut state = RunState::new();
        assert_eq!(state.switch_to(4), (None, 0));

        state.count();
        assert_eq!(state.switch_to(5), (Some(4), 1));
        assert_eq!(state.current_serial(), Some(5));
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_take_pending_keeps_serial() {
        let mut state = RunState::new();
        state.begin_stream(3, "Opus");
        state.count();
        assert_eq!(state.take_pending(), 1);
        assert_eq!(state.take_pending(), 0);
        assert_eq!(state.current_serial(), Some(3));
    }
}
