use crate::models::source::CaptureSource;

/// Live preview of the selected source.
pub trait PreviewSurface: Send + Sync {
    /// Show the stream `stream_id` captured from `source`.
    fn attach(&self, source: &CaptureSource, stream_id: &str);

    /// Stop showing the current stream.
    fn detach(&self);
}
