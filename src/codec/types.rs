use std::fmt;

/// Broad category of a logical stream's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    General,
    Audio,
    Video,
    Metadata,
}

/// Result of identifying a logical stream from its first packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OggStreamType {
    /// Human readable label, e.g. "Vorbis"
    pub description: &'static str,
    pub mime_type: &'static str,
    pub kind: StreamKind,
}

impl OggStreamType {
    const fn new(description: &'static str, mime_type: &'static str, kind: StreamKind) -> Self {
        Self {
            description,
            mime_type,
            kind,
        }
    }
}

impl fmt::Display for OggStreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.mime_type)
    }
}

pub const UNKNOWN: OggStreamType =
    OggStreamType::new("Unknown", "application/octet-stream", StreamKind::General);

// Audio
pub const VORBIS_AUDIO: OggStreamType =
    OggStreamType::new("Vorbis", "audio/vorbis", StreamKind::Audio);
pub const OPUS_AUDIO: OggStreamType = OggStreamType::new("Opus", "audio/opus", StreamKind::Audio);
pub const SPEEX_AUDIO: OggStreamType =
    OggStreamType::new("Speex", "audio/speex", StreamKind::Audio);
pub const FLAC_AUDIO: OggStreamType = OggStreamType::new("FLAC", "audio/flac", StreamKind::Audio);
pub const CELT_AUDIO: OggStreamType =
    OggStreamType::new("CELT", "audio/x-celt", StreamKind::Audio);
pub const OGG_PCM: OggStreamType =
    OggStreamType::new("Ogg PCM", "audio/x-oggpcm", StreamKind::Audio);
pub const OGM_AUDIO: OggStreamType =
    OggStreamType::new("Ogg OGM Audio", "audio/x-ogm", StreamKind::Audio);

// Video
pub const THEORA_VIDEO: OggStreamType =
    OggStreamType::new("Theora", "video/theora", StreamKind::Video);
pub const DAALA_VIDEO: OggStreamType =
    OggStreamType::new("Daala", "video/daala", StreamKind::Video);
pub const DIRAC_VIDEO: OggStreamType =
    OggStreamType::new("Dirac", "video/x-dirac", StreamKind::Video);
pub const OGM_VIDEO: OggStreamType =
    OggStreamType::new("Ogg OGM Video", "video/x-ogm", StreamKind::Video);
pub const OGG_UVS: OggStreamType =
    OggStreamType::new("Ogg UVS", "video/x-ogguvs", StreamKind::Video);
pub const OGG_YUV: OggStreamType =
    OggStreamType::new("Ogg YUV", "video/x-oggyuv", StreamKind::Video);

// Metadata and text
pub const SKELETON: OggStreamType = OggStreamType::new(
    "Skeleton",
    "application/x-ogg-skeleton",
    StreamKind::Metadata,
);
pub const KATE: OggStreamType = OggStreamType::new("Kate", "application/kate", StreamKind::Metadata);
pub const CMML: OggStreamType = OggStreamType::new("CMML", "text/x-cmml", StreamKind::Metadata);
pub const OGM_TEXT: OggStreamType =
    OggStreamType::new("Ogg OGM Text", "text/x-ogm", StreamKind::Metadata);
