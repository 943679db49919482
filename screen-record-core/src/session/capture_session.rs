use std::mem;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::models::codec::CodecDescriptor;
use crate::models::error::RecordError;
use crate::models::source::CaptureSource;
use crate::models::state::{ControllerState, SessionPhase};

/// State of one record-and-save cycle.
///
/// Created when a stream has been bound to a source, consumed once by
/// `finish` when recording stops. Chunks are kept in arrival order and only
/// accepted while recording.
#[derive(Debug)]
pub struct CaptureSession {
    id: Uuid,
    source: CaptureSource,
    stream_id: String,
    codec: CodecDescriptor,
    phase: SessionPhase,
    chunks: Vec<Vec<u8>>,
    bytes: u64,
    recording_started: Option<Instant>,
    recorded: Duration,
}

/// Media claimed from a session at stop time.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMedia {
    pub session_id: Uuid,
    pub source: CaptureSource,
    pub codec: CodecDescriptor,
    /// Chunks concatenated in arrival order.
    pub buffer: Vec<u8>,
    pub chunk_count: usize,
    pub duration_secs: f64,
}

impl CaptureSession {
    pub fn new(source: CaptureSource, stream_id: impl Into<String>, codec: CodecDescriptor) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            stream_id: stream_id.into(),
            codec,
            phase: SessionPhase::Idle,
            chunks: Vec::new(),
            bytes: 0,
            recording_started: None,
            recorded: Duration::ZERO,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn source(&self) -> &CaptureSource {
        &self.source
    }

    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    pub fn codec(&self) -> &CodecDescriptor {
        &self.codec
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn byte_len(&self) -> u64 {
        self.bytes
    }

    /// Transitions: idle → recording.
    pub fn begin_recording(&mut self) -> Result<(), RecordError> {
        if self.phase != SessionPhase::Idle {
            return Err(RecordError::invalid_transition("start", self.phase.name()));
        }
        self.phase = SessionPhase::Recording;
        self.recording_started = Some(Instant::now());
        Ok(())
    }

    /// Undo `begin_recording` after the stream refused to start.
    pub(crate) fn rollback_start(&mut self) {
        if self.phase != SessionPhase::Recording {
            return;
        }
        self.phase = SessionPhase::Idle;
        self.chunks.clear();
        self.bytes = 0;
        self.recording_started = None;
    }

    /// Append one encoded fragment. Returns whether it was kept.
    ///
    /// Empty fragments and fragments arriving outside a recording are ignored.
    pub fn append_chunk(&mut self, chunk: &[u8]) -> bool {
        if self.phase != SessionPhase::Recording || chunk.is_empty() {
            return false;
        }
        self.chunks.push(chunk.to_vec());
        self.bytes += chunk.len() as u64;
        true
    }

    /// Transitions: recording → stopped, claiming the concatenated chunks.
    pub fn finish(&mut self) -> Result<RecordedMedia, RecordError> {
        if self.phase != SessionPhase::Recording {
            return Err(RecordError::invalid_transition("stop", self.phase.name()));
        }
        self.mark_stopped();

        let chunks = mem::take(&mut self.chunks);
        let mut buffer = Vec::with_capacity(self.bytes as usize);
        for chunk in &chunks {
            buffer.extend_from_slice(chunk);
        }

        Ok(RecordedMedia {
            session_id: self.id,
            source: self.source.clone(),
            codec: self.codec.clone(),
            buffer,
            chunk_count: chunks.len(),
            duration_secs: self.recorded.as_secs_f64(),
        })
    }

    /// Transitions: recording → stopped, dropping the chunks unsaved.
    ///
    /// Returns the number of stranded chunks.
    pub fn abandon(&mut self) -> usize {
        if self.phase != SessionPhase::Recording {
            return 0;
        }
        self.mark_stopped();
        let stranded = self.chunks.len();
        self.chunks.clear();
        stranded
    }

    pub fn state(&self) -> ControllerState {
        let source = self.source.clone();
        match self.phase {
            SessionPhase::Idle => ControllerState::Idle { source },
            SessionPhase::Recording => ControllerState::Recording {
                source,
                chunk_count: self.chunks.len(),
                bytes: self.bytes,
            },
            SessionPhase::Stopped => ControllerState::Stopped { source },
        }
    }

    fn mark_stopped(&mut self) {
        self.phase = SessionPhase::Stopped;
        if let Some(started) = self.recording_started.take() {
            self.recorded = started.elapsed();
        }
    }
}

/// Controller state for an optional session slot.
pub(crate) fn state_of(slot: &Option<CaptureSession>) -> ControllerState {
    slot.as_ref()
        .map(CaptureSession::state)
        .unwrap_or(ControllerState::Empty)
}
