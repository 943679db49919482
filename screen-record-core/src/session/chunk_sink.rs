use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::error::RecordError;
use crate::models::state::SessionPhase;
use crate::session::capture_session::CaptureSession;
use crate::traits::recorder_delegate::RecorderDelegate;

pub(crate) type SharedSession = Arc<Mutex<Option<CaptureSession>>>;

/// Handle a `LiveStream` uses to deliver encoded chunks to its session.
///
/// Bound to a single session: once that session is replaced or discarded,
/// deliveries through an old handle are dropped.
#[derive(Clone)]
pub struct ChunkSink {
    session: SharedSession,
    session_id: Uuid,
    delegate: Option<Arc<dyn RecorderDelegate>>,
}

impl ChunkSink {
    pub(crate) fn new(
        session: SharedSession,
        session_id: Uuid,
        delegate: Option<Arc<dyn RecorderDelegate>>,
    ) -> Self {
        Self {
            session,
            session_id,
            delegate,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append a chunk to the bound session. Returns whether it was kept.
    pub fn deliver(&self, chunk: &[u8]) -> bool {
        let mut slot = self.session.lock();
        match slot.as_mut() {
            Some(session) if session.id() == self.session_id => session.append_chunk(chunk),
            _ => {
                log::debug!(
                    "dropping {} byte chunk for inactive session {}",
                    chunk.len(),
                    self.session_id
                );
                false
            }
        }
    }

    /// Report a fatal stream error.
    ///
    /// The recording stops and chunks received so far are discarded unsaved.
    pub fn fail(&self, reason: &str) {
        let state = {
            let mut slot = self.session.lock();
            match slot.as_mut() {
                Some(session)
                    if session.id() == self.session_id
                        && session.phase() == SessionPhase::Recording =>
                {
                    let stranded = session.abandon();
                    log::warn!(
                        "stream {} failed during recording, {} chunks stranded: {}",
                        session.stream_id(),
                        stranded,
                        reason
                    );
                    session.state()
                }
                _ => {
                    log::debug!("ignoring failure for inactive session {}: {}", self.session_id, reason);
                    return;
                }
            }
        };

        if let Some(ref delegate) = self.delegate {
            delegate.on_error(&RecordError::StreamAcquisition(format!(
                "stream failed during recording: {}",
                reason
            )));
            delegate.on_state_changed(&state);
        }
    }
}

impl fmt::Debug for ChunkSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkSink")
            .field("session_id", &self.session_id)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
