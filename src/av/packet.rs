use bytes::Bytes;

/// A packet reassembled from the pages of one logical stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub data: Bytes,
    /// Serial number of the owning logical stream
    pub serial: u32,
    /// Granule position of the page the packet ended on
    pub granule_position: i64,
    /// Sequence number of the page the packet ended on
    pub page_sequence: u32,
    pub is_bos: bool,
    pub is_eos: bool,
}

impl Packet {
    pub fn new(data: impl Into<Bytes>, serial: u32) -> Self {
        Self {
            data: data.into(),
            serial,
            granule_position: 0,
            page_sequence: 0,
            is_bos: false,
            is_eos: false,
        }
    }

    pub fn with_granule_position(mut self, granule_position: i64) -> Self {
        self.granule_position = granule_position;
        self
    }

    pub fn with_page_sequence(mut self, page_sequence: u32) -> Self {
        self.page_sequence = page_sequence;
        self
    }

    pub fn with_bos(mut self, is_bos: bool) -> Self {
        self.is_bos = is_bos;
        self
    }

    pub fn with_eos(mut self, is_eos: bool) -> Self {
        self.is_eos = is_eos;
        self
    }
}
