use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of capturable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Window,
    Screen,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Screen => "screen",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A window or screen the host can capture.
///
/// Produced by a `SourceEnumerator` as part of a snapshot. The controller
/// keeps its own clone of the selected source; it never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureSource {
    pub id: String,
    pub name: String,
    pub kind: SourceKind,
}

impl CaptureSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn is_screen(&self) -> bool {
        self.kind == SourceKind::Screen
    }

    pub fn is_window(&self) -> bool {
        self.kind == SourceKind::Window
    }
}
