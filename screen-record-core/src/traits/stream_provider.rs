use std::sync::Arc;

use crate::models::codec::CodecDescriptor;
use crate::models::error::RecordError;
use crate::models::source::CaptureSource;
use crate::session::chunk_sink::ChunkSink;

/// Video constraints: capture exactly one desktop source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoConstraints {
    pub source_id: String,
}

/// Constraints passed to `MediaStreamProvider::acquire`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConstraints {
    pub audio: bool,
    pub video: VideoConstraints,
}

impl StreamConstraints {
    /// Video-only capture of `source`. No audio track, no camera fallback.
    pub fn video_only(source: &CaptureSource) -> Self {
        Self {
            audio: false,
            video: VideoConstraints {
                source_id: source.id.clone(),
            },
        }
    }
}

/// A live stream bound to one capture source.
pub trait LiveStream: Send {
    /// Host identifier of the stream, shown to the preview surface.
    fn id(&self) -> &str;

    /// Begin encoding with `codec`, delivering fragments to `sink` in order.
    ///
    /// Chunks may be delivered from any thread. A fatal stream error is
    /// reported through `ChunkSink::fail`.
    fn start(&mut self, codec: &CodecDescriptor, sink: ChunkSink) -> Result<(), RecordError>;

    /// Finalize encoding and release the capture.
    ///
    /// Trailing chunks must be delivered before this returns.
    fn stop(&mut self) -> Result<(), RecordError>;
}

/// Turns a source identifier into a live stream.
pub trait MediaStreamProvider: Send + Sync {
    /// Acquire a stream satisfying `constraints`.
    ///
    /// Fails with `RecordError::StreamAcquisition` when the host denies the
    /// request or the source no longer exists.
    fn acquire(&self, constraints: &StreamConstraints) -> Result<Box<dyn LiveStream>, RecordError>;
}

impl<T: MediaStreamProvider + ?Sized> MediaStreamProvider for Arc<T> {
    fn acquire(&self, constraints: &StreamConstraints) -> Result<Box<dyn LiveStream>, RecordError> {
        (**self).acquire(constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::source::SourceKind;

    #[test]
    fn video_only_targets_source() {
        let source = CaptureSource::new("window:42", "Terminal", SourceKind::Window);
        let constraints = StreamConstraints::video_only(&source);
        assert!(!constraints.audio);
        assert_eq!(constraints.video.source_id, "window:42");
    }
}
