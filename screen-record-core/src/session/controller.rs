use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::config::RecorderConfiguration;
use crate::models::controls::{ControlsState, SourceMenuItem};
use crate::models::error::RecordError;
use crate::models::recording_result::{RecordingMetadata, RecordingResult, SaveOutcome};
use crate::models::source::CaptureSource;
use crate::models::state::ControllerState;
use crate::session::capture_session::{self, CaptureSession};
use crate::session::chunk_sink::{ChunkSink, SharedSession};
use crate::storage::checksum;
use crate::traits::persistence_sink::{PersistenceSink, SaveDialogOptions};
use crate::traits::preview_surface::PreviewSurface;
use crate::traits::recorder_delegate::RecorderDelegate;
use crate::traits::source_enumerator::SourceEnumerator;
use crate::traits::stream_provider::{LiveStream, MediaStreamProvider, StreamConstraints};

/// Capture session controller.
///
/// Generic over the host's source enumerator, stream provider and
/// persistence sink. Owns at most one `CaptureSession`:
/// ```text
/// [SourceEnumerator] → select_source → [MediaStreamProvider] → LiveStream
///                                                               │ chunks
///                                  start / stop ──→ [CaptureSession] → [PersistenceSink]
/// ```
/// Operations are expected to be driven from one UI thread; only chunk
/// delivery arrives from elsewhere, through a `ChunkSink`.
pub struct CaptureController<E: SourceEnumerator, P: MediaStreamProvider, S: PersistenceSink> {
    enumerator: E,
    provider: P,
    sink: S,
    config: RecorderConfiguration,
    session: SharedSession,
    stream: Option<Box<dyn LiveStream>>,
    preview: Option<Arc<dyn PreviewSurface>>,
    delegate: Option<Arc<dyn RecorderDelegate>>,
}

impl<E: SourceEnumerator, P: MediaStreamProvider, S: PersistenceSink> CaptureController<E, P, S> {
    pub fn new(enumerator: E, provider: P, sink: S) -> Self {
        Self {
            enumerator,
            provider,
            sink,
            config: RecorderConfiguration::default(),
            session: Arc::new(Mutex::new(None)),
            stream: None,
            preview: None,
            delegate: None,
        }
    }

    pub fn with_configuration(
        enumerator: E,
        provider: P,
        sink: S,
        config: RecorderConfiguration,
    ) -> Result<Self, RecordError> {
        config.validate().map_err(RecordError::Configuration)?;
        let mut controller = Self::new(enumerator, provider, sink);
        controller.config = config;
        Ok(controller)
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn RecorderDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn set_preview(&mut self, preview: Arc<dyn PreviewSurface>) {
        self.preview = Some(preview);
    }

    pub fn configuration(&self) -> &RecorderConfiguration {
        &self.config
    }

    pub fn state(&self) -> ControllerState {
        capture_session::state_of(&self.session.lock())
    }

    pub fn controls(&self) -> ControlsState {
        ControlsState::from_state(&self.state())
    }

    /// Snapshot of capturable windows and screens.
    pub fn enumerate_sources(&self) -> Result<Vec<CaptureSource>, RecordError> {
        let sources = self
            .enumerator
            .list(&self.config.source_kinds)
            .map_err(|e| self.report(as_enumeration_error(e)))?;
        log::debug!("enumerated {} capture sources", sources.len());
        Ok(sources)
    }

    /// One menu entry per enumerated source, in enumeration order.
    pub fn source_menu(&self) -> Result<Vec<SourceMenuItem>, RecordError> {
        Ok(self
            .enumerate_sources()?
            .into_iter()
            .map(SourceMenuItem::from)
            .collect())
    }

    /// Bind a video-only stream of `source` and create an idle session.
    ///
    /// Any previously bound, unrecorded stream is released. If acquisition
    /// fails, the existing session (if any) is left untouched.
    pub fn select_source(&mut self, source: &CaptureSource) -> Result<(), RecordError> {
        let current = self.state();
        if current.is_recording() {
            return Err(self.report(RecordError::invalid_transition(
                "select a source",
                current.name(),
            )));
        }

        let constraints = StreamConstraints::video_only(source);
        let stream = self
            .provider
            .acquire(&constraints)
            .map_err(|e| self.report(as_acquisition_error(e)))?;

        self.release_stream();

        let session = CaptureSession::new(source.clone(), stream.id(), self.config.codec.clone());
        log::info!(
            "bound {} source {:?} ({}) to stream {}, session {}",
            source.kind,
            source.name,
            source.id,
            stream.id(),
            session.id()
        );

        if let Some(ref preview) = self.preview {
            preview.attach(source, stream.id());
        }
        *self.session.lock() = Some(session);
        self.stream = Some(stream);

        self.notify_state();
        Ok(())
    }

    /// Transitions: idle → recording.
    pub fn start(&mut self) -> Result<(), RecordError> {
        let begun = {
            let mut slot = self.session.lock();
            match slot.as_mut() {
                Some(session) if self.stream.is_some() => {
                    session.begin_recording().map(|()| session.id())
                }
                Some(session) => Err(RecordError::invalid_transition("start", session.phase().name())),
                None => Err(RecordError::invalid_transition("start", ControllerState::Empty.name())),
            }
        };
        let session_id = begun.map_err(|e| self.report(e))?;

        let sink = ChunkSink::new(Arc::clone(&self.session), session_id, self.delegate.clone());
        if let Some(stream) = self.stream.as_mut() {
            if let Err(e) = stream.start(&self.config.codec, sink) {
                if let Some(session) = self.session.lock().as_mut() {
                    if session.id() == session_id {
                        session.rollback_start();
                    }
                }
                return Err(self.report(as_acquisition_error(e)));
            }
        }

        log::info!("recording started, session {}", session_id);
        self.notify_state();
        Ok(())
    }

    /// Append an encoded chunk to the recording session.
    ///
    /// Returns whether the chunk was kept; chunks are only accepted while
    /// recording.
    pub fn on_chunk(&self, chunk: &[u8]) -> bool {
        let kept = self
            .session
            .lock()
            .as_mut()
            .map(|session| session.append_chunk(chunk))
            .unwrap_or(false);
        if !kept {
            log::debug!("dropping {} byte chunk outside a recording", chunk.len());
        }
        kept
    }

    /// Stop recording and hand the concatenated chunks to the sink.
    ///
    /// Transitions: recording → stopped. A saved or cancelled recording then
    /// discards the session; a failed write leaves it stopped.
    pub fn stop(&mut self) -> Result<SaveOutcome, RecordError> {
        let current = self.state();
        if !current.is_recording() {
            return Err(self.report(RecordError::invalid_transition("stop", current.name())));
        }

        // Trailing chunks arrive while the stream finalizes, so the session
        // keeps recording until the stream has stopped.
        self.release_stream();

        let finished = match self.session.lock().as_mut() {
            Some(session) => session.finish(),
            None => Err(RecordError::invalid_transition("stop", ControllerState::Empty.name())),
        };
        let media = finished.map_err(|e| self.report(e))?;

        log::info!(
            "recording stopped: {} chunks, {} bytes",
            media.chunk_count,
            media.buffer.len()
        );
        self.notify_state();

        let options = SaveDialogOptions {
            button_label: self.config.save_button_label.clone(),
            default_path: self.config.suggested_file_name(Utc::now()),
        };

        let Some(path) = self.sink.prompt_save_path(&options) else {
            log::info!("save dialog dismissed, discarding {} bytes", media.buffer.len());
            self.discard_session(media.session_id);
            if let Some(ref delegate) = self.delegate {
                delegate.on_save_cancelled();
            }
            self.notify_state();
            return Ok(SaveOutcome::Cancelled);
        };

        if let Err(e) = self.sink.write(&path, &media.buffer) {
            return Err(self.report(as_persistence_error(e)));
        }

        let byte_len = media.buffer.len() as u64;
        let checksum = checksum::sha256_hex(&media.buffer);
        let metadata = RecordingMetadata::new(
            &media.session_id.to_string(),
            &media.source,
            &media.codec.mime_type,
            media.duration_secs,
            &path.to_string_lossy(),
            byte_len,
            &checksum,
        );
        let result = RecordingResult {
            file_path: path,
            byte_len,
            chunk_count: media.chunk_count,
            checksum,
            metadata,
        };
        log::info!("recording saved to {}", result.file_path.display());

        self.discard_session(media.session_id);
        if let Some(ref delegate) = self.delegate {
            delegate.on_recording_saved(&result);
        }
        self.notify_state();

        Ok(SaveOutcome::Saved(result))
    }

    // --- Internal helpers ---

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.stop() {
                log::warn!("failed to stop stream {}: {}", stream.id(), e);
            }
            if let Some(ref preview) = self.preview {
                preview.detach();
            }
        }
    }

    fn discard_session(&self, session_id: Uuid) {
        let mut slot = self.session.lock();
        if slot.as_ref().is_some_and(|session| session.id() == session_id) {
            *slot = None;
        }
    }

    fn notify_state(&self) {
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(&self.state());
        }
    }

    fn report(&self, error: RecordError) -> RecordError {
        log::error!("{}", error);
        if let Some(ref delegate) = self.delegate {
            delegate.on_error(&error);
        }
        error
    }
}

impl<E: SourceEnumerator, P: MediaStreamProvider, S: PersistenceSink> Drop for CaptureController<E, P, S> {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.stop() {
                log::warn!("failed to stop stream {} on drop: {}", stream.id(), e);
            }
        }
    }
}

fn as_enumeration_error(error: RecordError) -> RecordError {
    match error {
        RecordError::SourceEnumeration(_) => error,
        other => RecordError::SourceEnumeration(other.to_string()),
    }
}

fn as_acquisition_error(error: RecordError) -> RecordError {
    match error {
        RecordError::StreamAcquisition(_) => error,
        other => RecordError::StreamAcquisition(other.to_string()),
    }
}

fn as_persistence_error(error: RecordError) -> RecordError {
    match error {
        RecordError::Persistence(_) => error,
        other => RecordError::Persistence(other.to_string()),
    }
}
