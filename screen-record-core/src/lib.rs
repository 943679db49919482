//! # screen-record-core
//!
//! Platform-agnostic screen recording core.
//!
//! Provides the capture session state machine, ordered chunk buffering and
//! file output. Hosts plug in their own source enumeration, media stream
//! and save dialog facilities through the traits in `traits/` and drive a
//! `CaptureController` from their UI.
//!
//! ## Architecture
//!
//! ```text
//! screen-record-core (this crate)
//! ├── traits/    ← SourceEnumerator, MediaStreamProvider, LiveStream, PersistenceSink,
//! │                PreviewSurface, RecorderDelegate
//! ├── models/    ← RecordError, CaptureSource, CodecDescriptor, RecorderConfiguration,
//! │                ControllerState, ControlsState, RecordingResult
//! ├── session/   ← CaptureController, CaptureSession, ChunkSink
//! └── storage/   ← FileSink, SHA-256 checksum
//! ```

pub mod models;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::codec::CodecDescriptor;
pub use models::config::RecorderConfiguration;
pub use models::controls::{ControlsState, SourceMenuItem};
pub use models::error::RecordError;
pub use models::recording_result::{RecordingMetadata, RecordingResult, SaveOutcome};
pub use models::source::{CaptureSource, SourceKind};
pub use models::state::{ControllerState, SessionPhase};
pub use session::capture_session::{CaptureSession, RecordedMedia};
pub use session::chunk_sink::ChunkSink;
pub use session::controller::CaptureController;
pub use storage::file_sink::{FileSink, SavePrompt};
pub use traits::persistence_sink::{PersistenceSink, SaveDialogOptions};
pub use traits::preview_surface::PreviewSurface;
pub use traits::recorder_delegate::RecorderDelegate;
pub use traits::source_enumerator::SourceEnumerator;
pub use traits::stream_provider::{LiveStream, MediaStreamProvider, StreamConstraints, VideoConstraints};
