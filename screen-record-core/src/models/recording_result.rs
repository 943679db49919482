use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::RecordError;
use super::source::{CaptureSource, SourceKind};

/// Result returned when a recording has been written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingResult {
    pub file_path: PathBuf,
    pub byte_len: u64,
    pub chunk_count: usize,
    pub checksum: String,
    pub metadata: RecordingMetadata,
}

/// Description of a saved recording, serializable for a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    pub id: String,
    pub source_id: String,
    pub source_name: String,
    pub source_kind: SourceKind,
    pub mime_type: String,
    pub duration_secs: f64,
    pub file_path: String,
    pub byte_len: u64,
    pub checksum: String,
    pub created_at: String,
}

impl RecordingMetadata {
    pub fn new(
        session_id: &str,
        source: &CaptureSource,
        mime_type: &str,
        duration_secs: f64,
        file_path: &str,
        byte_len: u64,
        checksum: &str,
    ) -> Self {
        Self {
            id: session_id.to_string(),
            source_id: source.id.clone(),
            source_name: source.name.clone(),
            source_kind: source.kind,
            mime_type: mime_type.to_string(),
            duration_secs,
            file_path: file_path.to_string(),
            byte_len,
            checksum: checksum.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RecordError::Persistence(format!("failed to serialize metadata: {}", e)))
    }
}

/// Outcome of `stop()`. A dismissed save dialog is `Cancelled`, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(RecordingResult),
    Cancelled,
}

impl SaveOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn result(&self) -> Option<&RecordingResult> {
        match self {
            Self::Saved(result) => Some(result),
            Self::Cancelled => None,
        }
    }
}
