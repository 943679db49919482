use std::sync::Arc;

use crate::models::error::RecordError;
use crate::models::source::{CaptureSource, SourceKind};

/// Lists the windows and screens the host can capture.
///
/// Implemented by:
/// - `DesktopSourceEnumerator` (screen-record-desktop, `xcap` feature)
pub trait SourceEnumerator: Send + Sync {
    /// Snapshot of capturable sources of the requested kinds.
    ///
    /// Returns a finite list; later changes on the desktop are not reflected.
    /// Fails with `RecordError::SourceEnumeration` when the host capability
    /// is unavailable.
    fn list(&self, kinds: &[SourceKind]) -> Result<Vec<CaptureSource>, RecordError>;
}

impl<T: SourceEnumerator + ?Sized> SourceEnumerator for Arc<T> {
    fn list(&self, kinds: &[SourceKind]) -> Result<Vec<CaptureSource>, RecordError> {
        (**self).list(kinds)
    }
}
