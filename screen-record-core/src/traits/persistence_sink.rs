use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::error::RecordError;

/// Options shown in the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogOptions {
    pub button_label: String,
    /// Suggested file name, e.g. `vid-1700000000123.webm`.
    pub default_path: String,
}

/// Destination for finished recordings.
pub trait PersistenceSink: Send + Sync {
    /// Ask the user where to save. `None` means the dialog was dismissed.
    fn prompt_save_path(&self, options: &SaveDialogOptions) -> Option<PathBuf>;

    /// Write `data` to `path`, failing with `RecordError::Persistence`.
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), RecordError>;
}

impl<T: PersistenceSink + ?Sized> PersistenceSink for Arc<T> {
    fn prompt_save_path(&self, options: &SaveDialogOptions) -> Option<PathBuf> {
        (**self).prompt_save_path(options)
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), RecordError> {
        (**self).write(path, data)
    }
}
