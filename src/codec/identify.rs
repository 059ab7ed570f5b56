use super::types::*;
use super::StreamIdentifier;
use crate::av::Packet;

/// Leading bytes of a BOS packet and the stream type they announce.
/// Checked in order, first match wins.
const SIGNATURES: &[(&[u8], OggStreamType)] = &[
    (b"\x01vorbis", VORBIS_AUDIO),
    (b"\x80theora", THEORA_VIDEO),
    (b"\x80daala", DAALA_VIDEO),
    (b"\x80kate\0\0\0", KATE),
    (b"OpusHead", OPUS_AUDIO),
    (b"Speex   ", SPEEX_AUDIO),
    (b"\x7FFLAC", FLAC_AUDIO),
    (b"PCM     ", OGG_PCM),
    (b"CELT    ", CELT_AUDIO),
    (b"fishead\0", SKELETON),
    (b"CMML\0\0\0\0", CMML),
    (b"BBCD\0", DIRAC_VIDEO),
    (b"\x01video", OGM_VIDEO),
    (b"\x01audio", OGM_AUDIO),
    (b"\x01text", OGM_TEXT),
    (b"UVS     ", OGG_UVS),
    (b"YUV4MPEG", OGG_YUV),
];

/// Identifies the content of a logical stream from the magic bytes at the
/// start of its BOS packet.
#[derive(Debug, Default, Clone, Copy)]
pub struct OggStreamIdentifier;

impl OggStreamIdentifier {
    pub fn new() -> Self {
        Self
    }

    /// Identifies a raw BOS payload
    pub fn identify_payload(data: &[u8]) -> OggStreamType {
        SIGNATURES
            .iter()
            .find(|(magic, _)| data.starts_with(magic))
            .map(|(_, stream_type)| *stream_type)
            .unwrap_or(UNKNOWN)
    }
}

impl StreamIdentifier for OggStreamIdentifier {
    fn identify(&self, packet: &Packet) -> OggStreamType {
        let stream_type = Self::identify_payload(&packet.data);
        log::debug!(
            "stream {:x} identified as {}",
            packet.serial,
            stream_type
        );
        stream_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identify(data: &[u8]) -> OggStreamType {
        OggStreamIdentifier::new().identify(&Packet::new(data.to_vec(), 1).with_bos(true))
    }

    #[test]
    fn test_identify_audio() {
        assert_eq!(identify(b"\x01vorbis\x00\x00\x00\x00\x02\x44\xac"), VORBIS_AUDIO);
        assert_eq!(identify(b"OpusHead\x01\x02\x38\x01"), OPUS_AUDIO);
        assert_eq!(identify(b"Speex   1.2rc1"), SPEEX_AUDIO);
        assert_eq!(identify(b"\x7FFLAC\x01\x00\x00\x01fLaC"), FLAC_AUDIO);
        assert_eq!(identify(b"PCM     \x00\x00"), OGG_PCM);
        assert_eq!(identify(b"CELT    0.11.1"), CELT_AUDIO);
    }

    #[test]
    fn test_identify_video_and_metadata() {
        assert_eq!(identify(b"\x80theora\x03\x02\x01"), THEORA_VIDEO);
        assert_eq!(identify(b"\x80daala\x00"), DAALA_VIDEO);
        assert_eq!(identify(b"BBCD\x00\x00\x00\x00\x0d"), DIRAC_VIDEO);
        assert_eq!(identify(b"\x01video\x00\x00\x00XVID"), OGM_VIDEO);
        assert_eq!(identify(b"\x01audio\x00\x00\x00"), OGM_AUDIO);
        assert_eq!(identify(b"\x01text\x00\x00\x00\x00"), OGM_TEXT);
        assert_eq!(identify(b"fishead\x00\x03\x00"), SKELETON);
        assert_eq!(identify(b"\x80kate\x00\x00\x00\x00"), KATE);
        assert_eq!(identify(b"CMML\x00\x00\x00\x00\x02"), CMML);
        assert_eq!(identify(b"UVS     "), OGG_UVS);
        assert_eq!(identify(b"YUV4MPEG2 W320"), OGG_YUV);
    }

    #[test]
    fn test_identify_unknown() {
        assert_eq!(identify(b""), UNKNOWN);
        assert_eq!(identify(b"\x01vorb"), UNKNOWN);
        assert_eq!(identify(b"\x80kate\x00"), UNKNOWN);
        assert_eq!(identify(b"RIFF\x24\x00\x00\x00WAVE"), UNKNOWN);
    }

    #[test]
    fn test_display() {
        assert_eq!(VORBIS_AUDIO.to_string(), "Vorbis (audio/vorbis)");
        assert_eq!(SKELETON.kind, StreamKind::Metadata);
    }
}
