// Capture pattern at the start of every page
pub const CAPTURE_PATTERN: [u8; 4] = *b"OggS";

// Header type flags
pub const FLAG_CONTINUED: u8 = 0x01;
pub const FLAG_BOS: u8 = 0x02;
pub const FLAG_EOS: u8 = 0x04;

// Constants
pub const OGG_VERSION: u8 = 0;
pub const PAGE_HEADER_SIZE: usize = 27;
pub const CRC_OFFSET: usize = 22;

/// Fixed 27 byte page header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OggPageHeader {
    pub version: u8,
    pub header_type: u8,
    /// Codec defined position of the last packet completed on this page,
    /// -1 when no packet completes here
    pub granule_position: i64,
    pub serial: u32,
    pub page_sequence: u32,
    pub checksum: u32,
    pub segment_count: u8,
}

impl OggPageHeader {
    pub fn is_continued(&self) -> bool {
        self.header_type & FLAG_CONTINUED != 0
    }

    pub fn is_bos(&self) -> bool {
        self.header_type & FLAG_BOS != 0
    }

    pub fn is_eos(&self) -> bool {
        self.header_type & FLAG_EOS != 0
    }
}

/// A page as read from the physical stream
#[derive(Debug, Clone)]
pub struct OggPage {
    pub header: OggPageHeader,
    pub lacing: Vec<u8>,
    pub body: bytes::Bytes,
}

/// Location of one packet (or packet fragment) inside a page body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketSpan {
    pub offset: usize,
    pub length: usize,
    /// False when the last lacing value is 255 and the packet continues on
    /// the next page of the same stream
    pub complete: bool,
}
