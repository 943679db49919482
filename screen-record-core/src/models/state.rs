use super::source::CaptureSource;

/// Lifecycle phase of a single capture session.
///
/// ```text
/// idle (stream bound) → recording → stopped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Recording,
    Stopped,
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Stopped => "stopped",
        }
    }
}

/// Observable state of a capture controller.
///
/// State transitions:
/// ```text
/// empty → idle ⇄ idle (reselect) → recording → stopped
///           ↑                                     │
///           └──────────── select source ──────────┘
/// ```
/// A saved or cancelled recording discards the session and returns to `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Empty,
    Idle {
        source: CaptureSource,
    },
    Recording {
        source: CaptureSource,
        chunk_count: usize,
        bytes: u64,
    },
    Stopped {
        source: CaptureSource,
    },
}

impl ControllerState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "no source selected",
            Self::Idle { .. } => SessionPhase::Idle.name(),
            Self::Recording { .. } => SessionPhase::Recording.name(),
            Self::Stopped { .. } => SessionPhase::Stopped.name(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped { .. })
    }

    /// The selected source, if a session exists.
    pub fn source(&self) -> Option<&CaptureSource> {
        match self {
            Self::Empty => None,
            Self::Idle { source } | Self::Recording { source, .. } | Self::Stopped { source } => {
                Some(source)
            }
        }
    }
}
