use super::parser::OggPageParser;
use super::types::*;
use crate::av::Packet;
use crate::config::Config;
use crate::error::Result;
use crate::format::Demuxer as FormatDemuxer;
use bytes::{Bytes, BytesMut};
use log::{debug, warn};
use std::collections::{HashMap, VecDeque};
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

/// Ogg demuxer.
///
/// Reads pages from the physical stream and hands out the packets of all
/// logical streams in the order they complete. It supports:
/// - resynchronisation on the capture pattern
/// - page checksum verification
/// - reassembly of packets spanning several pages, per serial
pub struct OggDemuxer<R: AsyncRead + Unpin + Send> {
    reader: BufReader<R>,
    parser: OggPageParser,
    verify_crc: bool,
    /// Packets completed on the last page, not yet handed out
    ready: VecDeque<Packet>,
    /// Unfinished packets keyed by serial
    partials: HashMap<u32, PartialPacket>,
    /// Last page sequence number seen per serial
    sequences: HashMap<u32, u32>,
}

/// A packet whose lacing ran off the end of a page.
#[derive(Debug)]
struct PartialPacket {
    data: BytesMut,
    /// Started at the head of a BOS page
    bos: bool,
}

impl<R: AsyncRead + Unpin + Send> OggDemuxer<R> {
    /// Creates a new demuxer with checksum verification enabled.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            parser: OggPageParser::new(),
            verify_crc: true,
            ready: VecDeque::new(),
            partials: HashMap::new(),
            sequences: HashMap::new(),
        }
    }

    /// Creates a demuxer honouring the given configuration.
    pub fn with_config(reader: R, config: &Config) -> Self {
        Self::new(reader).with_crc_verification(config.verify_crc)
    }

    pub fn with_crc_verification(mut self, verify_crc: bool) -> Self {
        self.verify_crc = verify_crc;
        self
    }

    /// Scans forward to the next capture pattern.
    ///
    /// Returns false when the input ends first.
    async fn sync(&mut self) -> Result<bool> {
        let mut window = [0u8; 4];
        let mut filled = 0;
        let mut skipped = 0u64;

        loop {
            if filled == window.len() {
                if window == CAPTURE_PATTERN {
                    if skipped > 0 {
                        warn!("skipped {} bytes before next Ogg page", skipped);
                    }
                    return Ok(true);
                }
                window.copy_within(1.., 0);
                filled -= 1;
                skipped += 1;
            }

            match self.reader.read_u8().await {
                Ok(byte) => {
                    window[filled] = byte;
                    filled += 1;
                }
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    let trailing = skipped + filled as u64;
                    if trailing > 0 {
                        warn!("ignoring {} trailing bytes after last Ogg page", trailing);
                    }
                    return Ok(false);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Reads the next page whose checksum passes (or any page when
    /// verification is off). `None` at end of input.
    async fn read_page(&mut self) -> Result<Option<OggPage>> {
        loop {
            if !self.sync().await? {
                return Ok(None);
            }

            let mut header_data = [0u8; PAGE_HEADER_SIZE];
            header_data[..4].copy_from_slice(&CAPTURE_PATTERN);
            self.reader.read_exact(&mut header_data[4..]).await?;
            let header = self.parser.parse_header(&header_data)?;

            let mut lacing = vec![0u8; header.segment_count as usize];
            self.reader.read_exact(&mut lacing).await?;

            let body_len = lacing.iter().map(|&v| v as usize).sum();
            let mut body = vec![0u8; body_len];
            self.reader.read_exact(&mut body).await?;

            if self.verify_crc && !self.parser.verify_checksum(&header_data, &lacing, &body) {
                warn!(
                    "dropping page {} of stream {:x}: checksum mismatch",
                    header.page_sequence, header.serial
                );
                self.partials.remove(&header.serial);
                continue;
            }

            debug!(
                "page {} of stream {:x}: flags {:#04x}, {} segments, {} bytes",
                header.page_sequence,
                header.serial,
                header.header_type,
                header.segment_count,
                body_len
            );

            return Ok(Some(OggPage {
                header,
                lacing,
                body: Bytes::from(body),
            }));
        }
    }

    fn check_sequence(&mut self, serial: u32, sequence: u32) {
        if let Some(last) = self.sequences.insert(serial, sequence) {
            if sequence != last.wrapping_add(1) {
                warn!(
                    "stream {:x}: page sequence jumped from {} to {}",
                    serial, last, sequence
                );
            }
        }
    }

    /// Splits a page into packets, queueing the completed ones.
    fn process_page(&mut self, page: OggPage) {
        let header = &page.header;
        let serial = header.serial;
        self.check_sequence(serial, header.page_sequence);

        let mut partial = self.partials.remove(&serial);
        let mut skip_head = false;
        if header.is_continued() {
            if partial.is_none() {
                debug!("stream {:x}: dropping continuation of unseen packet", serial);
                skip_head = true;
            }
        } else if let Some(lost) = partial.take() {
            warn!(
                "stream {:x}: discarding {} bytes of unfinished packet",
                serial,
                lost.data.len()
            );
        }

        let spans = self.parser.segment_packets(&page.lacing);
        let mut completed = Vec::new();

        for (i, span) in spans.iter().enumerate() {
            if i == 0 && skip_head {
                continue;
            }

            let fragment = page.body.slice(span.offset..span.offset + span.length);
            let mut current = partial.take().unwrap_or_else(|| PartialPacket {
                data: BytesMut::new(),
                bos: header.is_bos() && i == 0,
            });
            current.data.extend_from_slice(&fragment);

            if span.complete {
                completed.push(current);
            } else {
                partial = Some(current);
            }
        }

        if header.is_eos() {
            if let Some(lost) = partial.take() {
                warn!(
                    "stream {:x}: discarding {} bytes of packet cut by end of stream",
                    serial,
                    lost.data.len()
                );
            }
            if completed.is_empty() {
                debug!("stream {:x}: empty end-of-stream page", serial);
                completed.push(PartialPacket {
                    data: BytesMut::new(),
                    bos: false,
                });
            }
        } else if let Some(partial) = partial {
            self.partials.insert(serial, partial);
        }

        let last = completed.len().saturating_sub(1);
        for (i, finished) in completed.into_iter().enumerate() {
            self.ready.push_back(
                Packet::new(finished.data.freeze(), serial)
                    .with_granule_position(header.granule_position)
                    .with_page_sequence(header.page_sequence)
                    .with_bos(finished.bos)
                    .with_eos(header.is_eos() && i == last),
            );
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncRead + Unpin + Send> FormatDemuxer for OggDemuxer<R> {
    async fn read_packet(&mut self) -> Result<Option<Packet>> {
        loop {
            if let Some(packet) = self.ready.pop_front() {
                return Ok(Some(packet));
            }

            match self.read_page().await? {
                Some(page) => self.process_page(page),
                None => {
                    for (serial, partial) in self.partials.drain() {
                        warn!(
                            "stream {:x}: input ended inside a {} byte packet",
                            serial,
                            partial.data.len()
                        );
                    }
                    return Ok(None);
                }
            }
        }
    }
}
