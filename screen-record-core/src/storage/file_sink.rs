use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::error::RecordError;
use crate::traits::persistence_sink::{PersistenceSink, SaveDialogOptions};

/// Save dialog callback: receives the dialog options, returns the chosen
/// path or `None` when dismissed.
pub type SaveDialogFn = Arc<dyn Fn(&SaveDialogOptions) -> Option<PathBuf> + Send + Sync + 'static>;

/// How a `FileSink` picks the destination path.
#[derive(Clone)]
pub enum SavePrompt {
    /// Save under a fixed directory using the suggested file name.
    Directory(PathBuf),
    /// Ask the host (e.g. a native save dialog).
    Dialog(SaveDialogFn),
}

impl fmt::Debug for SavePrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => f.debug_tuple("Directory").field(dir).finish(),
            Self::Dialog(_) => f.write_str("Dialog(..)"),
        }
    }
}

/// Filesystem persistence sink.
///
/// Writes the whole recording in one pass, then flushes and syncs it.
/// Missing parent directories are created.
#[derive(Debug, Clone)]
pub struct FileSink {
    prompt: SavePrompt,
}

impl FileSink {
    pub fn new(prompt: SavePrompt) -> Self {
        Self { prompt }
    }

    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        Self::new(SavePrompt::Directory(dir.into()))
    }

    pub fn with_dialog<F>(dialog: F) -> Self
    where
        F: Fn(&SaveDialogOptions) -> Option<PathBuf> + Send + Sync + 'static,
    {
        Self::new(SavePrompt::Dialog(Arc::new(dialog)))
    }

    pub fn prompt(&self) -> &SavePrompt {
        &self.prompt
    }
}

impl PersistenceSink for FileSink {
    fn prompt_save_path(&self, options: &SaveDialogOptions) -> Option<PathBuf> {
        match &self.prompt {
            SavePrompt::Directory(dir) => Some(dir.join(&options.default_path)),
            SavePrompt::Dialog(dialog) => dialog(options),
        }
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), RecordError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| RecordError::Persistence(format!("failed to create directory: {}", e)))?;
        }

        let mut file = File::create(path)
            .map_err(|e| RecordError::Persistence(format!("failed to create {}: {}", path.display(), e)))?;
        file.write_all(data)
            .map_err(|e| RecordError::Persistence(format!("write failed: {}", e)))?;
        file.flush()
            .map_err(|e| RecordError::Persistence(format!("flush failed: {}", e)))?;
        file.sync_all()
            .map_err(|e| RecordError::Persistence(format!("sync failed: {}", e)))?;

        log::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("screen_record_sink_{}_{}", name, uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn options() -> SaveDialogOptions {
        SaveDialogOptions {
            button_label: "Save video".into(),
            default_path: "vid-1700000000000.webm".into(),
        }
    }

    #[test]
    fn directory_prompt_uses_suggested_name() {
        let sink = FileSink::in_directory("/recordings");
        assert_eq!(
            sink.prompt_save_path(&options()),
            Some(PathBuf::from("/recordings/vid-1700000000000.webm"))
        );
    }

    #[test]
    fn dialog_prompt_receives_options() {
        let sink = FileSink::with_dialog(|opts| {
            assert_eq!(opts.button_label, "Save video");
            None
        });
        assert_eq!(sink.prompt_save_path(&options()), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = temp_dir("nested");
        let path = dir.join("a").join("b").join("out.webm");

        let sink = FileSink::in_directory(&dir);
        sink.write(&path, &[1, 2, 3, 4]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3, 4]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = temp_dir("replace");
        let path = dir.join("out.webm");
        fs::write(&path, vec![9u8; 100]).unwrap();

        FileSink::in_directory(&dir).write(&path, &[7, 7]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![7, 7]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn write_into_directory_path_fails() {
        let dir = temp_dir("isdir");

        let err = FileSink::in_directory(&dir).write(&dir, &[1]).unwrap_err();
        assert!(matches!(err, RecordError::Persistence(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
