use crate::av::Packet;
use crate::{OggError, Result};
use futures::stream::{self, Stream};

pub mod ogg;

/// Common trait for container demuxers
#[async_trait::async_trait]
pub trait Demuxer: Send {
    /// Read the next packet, `None` once the input is exhausted
    async fn read_packet(&mut self) -> Result<Option<Packet>>;
}

/// Turns a demuxer into a lazily pulled stream of packets.
///
/// Each poll reads only as far as the next completed packet, so the whole
/// file is never held in memory.
pub fn packets<D: Demuxer>(demuxer: D) -> impl Stream<Item = Result<Packet>> {
    stream::try_unfold(demuxer, |mut demuxer| async move {
        let next = demuxer.read_packet().await?;
        Ok::<_, OggError>(next.map(|packet| (packet, demuxer)))
    })
}

pub use self::ogg::OggDemuxer;
