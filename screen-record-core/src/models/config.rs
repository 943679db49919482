use chrono::{DateTime, Utc};

use super::codec::CodecDescriptor;
use super::source::SourceKind;

/// Configuration for a capture controller.
///
/// Built in code by the host; never read from or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfiguration {
    /// Container/codec pair every recording is tagged with (default: WebM/VP9).
    pub codec: CodecDescriptor,

    /// Source kinds requested from the enumerator (default: windows and screens).
    pub source_kinds: Vec<SourceKind>,

    /// Prefix of the suggested file name (default: `vid`).
    pub file_name_prefix: String,

    /// Label of the save dialog's confirm button (default: `Save video`).
    pub save_button_label: String,
}

impl RecorderConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        self.codec.validate()?;
        if self.source_kinds.is_empty() {
            return Err("at least one source kind is required".into());
        }
        if self.file_name_prefix.is_empty() {
            return Err("file name prefix must not be empty".into());
        }
        if self
            .file_name_prefix
            .contains(|c: char| std::path::is_separator(c))
        {
            return Err(format!(
                "file name prefix must not contain a path separator: {}",
                self.file_name_prefix
            ));
        }
        Ok(())
    }

    /// Suggested file name for a recording saved at `at`: `vid-<unix millis>.webm`.
    pub fn suggested_file_name(&self, at: DateTime<Utc>) -> String {
        format!(
            "{}-{}.{}",
            self.file_name_prefix,
            at.timestamp_millis(),
            self.codec.extension
        )
    }
}

impl Default for RecorderConfiguration {
    fn default() -> Self {
        Self {
            codec: CodecDescriptor::webm_vp9(),
            source_kinds: vec![SourceKind::Window, SourceKind::Screen],
            file_name_prefix: "vid".into(),
            save_button_label: "Save video".into(),
        }
    }
}
