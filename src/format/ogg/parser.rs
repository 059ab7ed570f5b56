use super::types::*;
use crate::error::{OggError, Result};
use crate::utils::crc::Crc32Ogg;
use bytes::Buf;

pub struct OggPageParser {
    crc: Crc32Ogg,
}

impl OggPageParser {
    pub fn new() -> Self {
        Self {
            crc: Crc32Ogg::new(),
        }
    }

    pub fn parse_header(&self, data: &[u8]) -> Result<OggPageHeader> {
        if data.len() < PAGE_HEADER_SIZE {
            return Err(OggError::InvalidData("Ogg page header too short".into()));
        }

        if data[..4] != CAPTURE_PATTERN {
            return Err(OggError::InvalidData("Invalid capture pattern".into()));
        }

        if data[4] != OGG_VERSION {
            return Err(OggError::InvalidData(format!(
                "Unsupported Ogg version {}",
                data[4]
            )));
        }

        let mut buf = &data[5..PAGE_HEADER_SIZE];
        Ok(OggPageHeader {
            version: data[4],
            header_type: buf.get_u8(),
            granule_position: buf.get_i64_le(),
            serial: buf.get_u32_le(),
            page_sequence: buf.get_u32_le(),
            checksum: buf.get_u32_le(),
            segment_count: buf.get_u8(),
        })
    }

    /// Splits a lacing table into packet spans over the page body.
    ///
    /// A lacing value below 255 terminates a packet; a trailing run of 255s
    /// leaves an incomplete span that continues on the next page.
    pub fn segment_packets(&self, lacing: &[u8]) -> Vec<PacketSpan> {
        let mut spans = Vec::new();
        let mut offset = 0;
        let mut length = 0;

        for &value in lacing {
            length += value as usize;
            if value < 255 {
                spans.push(PacketSpan {
                    offset,
                    length,
                    complete: true,
                });
                offset += length;
                length = 0;
            }
        }

        if lacing.last() == Some(&255) {
            spans.push(PacketSpan {
                offset,
                length,
                complete: false,
            });
        }

        spans
    }

    /// Checks the page CRC, computed with the checksum field zeroed.
    pub fn verify_checksum(&self, header: &[u8], lacing: &[u8], body: &[u8]) -> bool {
        if header.len() < PAGE_HEADER_SIZE {
            return false;
        }
        let expected = (&header[CRC_OFFSET..CRC_OFFSET + 4]).get_u32_le();

        let mut crc = self.crc.update(0, &header[..CRC_OFFSET]);
        crc = self.crc.update(crc, &[0; 4]);
        crc = self.crc.update(crc, &header[CRC_OFFSET + 4..PAGE_HEADER_SIZE]);
        crc = self.crc.update(crc, lacing);
        crc = self.crc.update(crc, body);

        crc == expected
    }
}

impl Default for OggPageParser {
    fn default() -> Self {
        Self::new()
    }
}
