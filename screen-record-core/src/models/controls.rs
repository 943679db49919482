use super::source::CaptureSource;
use super::state::ControllerState;

pub const START_LABEL: &str = "Start";
pub const RECORDING_LABEL: &str = "Recording";
pub const CHOOSE_SOURCE_LABEL: &str = "Choose a Video Source";

/// Enabled flags and labels for the recorder's three controls.
///
/// The host UI renders this after every state change; start and stop are
/// never enabled together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsState {
    pub choose_source_enabled: bool,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub start_label: &'static str,
    pub source_label: String,
}

impl ControlsState {
    pub fn from_state(state: &ControllerState) -> Self {
        let recording = state.is_recording();
        Self {
            choose_source_enabled: !recording,
            start_enabled: state.is_idle(),
            stop_enabled: recording,
            start_label: if recording { RECORDING_LABEL } else { START_LABEL },
            source_label: state
                .source()
                .map(|source| source.name.clone())
                .unwrap_or_else(|| CHOOSE_SOURCE_LABEL.to_string()),
        }
    }
}

/// One entry of the source selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMenuItem {
    pub label: String,
    pub source: CaptureSource,
}

impl From<CaptureSource> for SourceMenuItem {
    fn from(source: CaptureSource) -> Self {
        Self {
            label: source.name.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::source::SourceKind;

    fn source() -> CaptureSource {
        CaptureSource::new("screen:0", "Entire screen", SourceKind::Screen)
    }

    #[test]
    fn empty_only_allows_choosing() {
        let controls = ControlsState::from_state(&ControllerState::Empty);
        assert!(controls.choose_source_enabled);
        assert!(!controls.start_enabled);
        assert!(!controls.stop_enabled);
        assert_eq!(controls.source_label, CHOOSE_SOURCE_LABEL);
        assert_eq!(controls.start_label, START_LABEL);
    }

    #[test]
    fn idle_enables_start() {
        let controls = ControlsState::from_state(&ControllerState::Idle { source: source() });
        assert!(controls.start_enabled);
        assert!(!controls.stop_enabled);
        assert_eq!(controls.source_label, "Entire screen");
    }

    #[test]
    fn recording_enables_only_stop() {
        let controls = ControlsState::from_state(&ControllerState::Recording {
            source: source(),
            chunk_count: 0,
            bytes: 0,
        });
        assert!(!controls.choose_source_enabled);
        assert!(!controls.start_enabled);
        assert!(controls.stop_enabled);
        assert_eq!(controls.start_label, RECORDING_LABEL);
    }

    #[test]
    fn stopped_requires_new_selection() {
        let controls = ControlsState::from_state(&ControllerState::Stopped { source: source() });
        assert!(controls.choose_source_enabled);
        assert!(!controls.start_enabled);
        assert!(!controls.stop_enabled);
    }

    #[test]
    fn menu_item_label_is_source_name() {
        let item = SourceMenuItem::from(source());
        assert_eq!(item.label, "Entire screen");
        assert_eq!(item.source.id, "screen:0");
    }
}
