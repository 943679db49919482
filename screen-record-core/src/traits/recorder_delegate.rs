use crate::models::error::RecordError;
use crate::models::recording_result::RecordingResult;
use crate::models::state::ControllerState;

/// Event delegate for controller notifications.
///
/// Chunk-driven notifications (stream failure) arrive on the provider's
/// thread. Implementations should marshal to the UI thread if needed.
pub trait RecorderDelegate: Send + Sync {
    /// Called after every state change.
    fn on_state_changed(&self, state: &ControllerState);

    /// Called for every error, before it is returned to the caller.
    fn on_error(&self, error: &RecordError);

    /// Called when a recording has been written to disk.
    fn on_recording_saved(&self, result: &RecordingResult);

    /// Called when the user dismissed the save dialog.
    fn on_save_cancelled(&self) {}
}
