#![allow(dead_code)]

use ogginfo::format::ogg::{
    CAPTURE_PATTERN, CRC_OFFSET, FLAG_BOS, FLAG_CONTINUED, FLAG_EOS, OGG_VERSION,
    PAGE_HEADER_SIZE,
};
use ogginfo::utils::Crc32Ogg;
use std::path::PathBuf;
use tempfile::TempDir;

pub const BOS: u8 = FLAG_BOS;
pub const EOS: u8 = FLAG_EOS;
pub const CONTINUED: u8 = FLAG_CONTINUED;

/// Builds Ogg files page by page with valid checksums.
#[derive(Default)]
pub struct OggFileBuilder {
    data: Vec<u8>,
    sequences: std::collections::HashMap<u32, u32>,
}

impl OggFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page carrying the given whole packets.
    pub fn page(self, serial: u32, flags: u8, packets: &[&[u8]]) -> Self {
        let mut lacing = Vec::new();
        for packet in packets {
            lacing.extend(std::iter::repeat(255u8).take(packet.len() / 255));
            lacing.push((packet.len() % 255) as u8);
        }
        let body = packets.concat();
        self.raw_page(serial, flags, &lacing, &body)
    }

    pub fn raw_page(mut self, serial: u32, flags: u8, lacing: &[u8], body: &[u8]) -> Self {
        let sequence = self.sequences.entry(serial).or_insert(0);
        let mut page = Vec::with_capacity(PAGE_HEADER_SIZE + lacing.len() + body.len());
        page.extend_from_slice(&CAPTURE_PATTERN);
        page.push(OGG_VERSION);
        page.push(flags);
        page.extend_from_slice(&0i64.to_le_bytes());
        page.extend_from_slice(&serial.to_le_bytes());
        page.extend_from_slice(&sequence.to_le_bytes());
        page.extend_from_slice(&[0; 4]);
        page.push(lacing.len() as u8);
        page.extend_from_slice(lacing);
        page.extend_from_slice(body);
        let crc = Crc32Ogg::new().calculate(&page);
        page[CRC_OFFSET..CRC_OFFSET + 4].copy_from_slice(&crc.to_le_bytes());

        *sequence += 1;
        self.data.extend(page);
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Writes the file into `dir` and returns its path.
    pub fn write_to(&self, dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, &self.data).unwrap();
        path
    }
}

/// A Vorbis stream with `audio` mid-stream packets after its headers.
pub fn vorbis_file(serial: u32, audio: usize) -> OggFileBuilder {
    let audio_packet = vec![0x55u8; 40];
    let packets: Vec<&[u8]> = std::iter::repeat(&audio_packet[..]).take(audio).collect();
    OggFileBuilder::new()
        .page(serial, BOS, &[b"\x01vorbis\x00\x00\x00\x00\x02\x44\xac\x00\x00"])
        .page(serial, 0, &[b"\x03vorbis comments", b"\x05vorbis setup"])
        .page(serial, 0, &packets)
        .page(serial, EOS, &[b"last audio"])
}
