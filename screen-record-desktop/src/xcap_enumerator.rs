//! Live desktop enumeration via xcap.

use xcap::{Monitor, Window};

use screen_record_core::{CaptureSource, RecordError, SourceEnumerator, SourceKind};

use crate::sources::{self, MonitorEntry, WindowEntry};

/// `SourceEnumerator` over the monitors and windows of the current desktop.
///
/// Each call takes a fresh snapshot. Windows whose properties cannot be read
/// (e.g. closed during enumeration) are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopSourceEnumerator;

impl DesktopSourceEnumerator {
    pub fn new() -> Self {
        Self
    }

    fn monitors() -> Result<Vec<MonitorEntry>, RecordError> {
        let monitors = Monitor::all()
            .map_err(|e| RecordError::SourceEnumeration(format!("failed to get monitors: {}", e)))?;

        Ok(monitors
            .iter()
            .map(|m| MonitorEntry {
                name: m.name().unwrap_or_default(),
                is_primary: m.is_primary().unwrap_or(false),
            })
            .collect())
    }

    fn windows() -> Result<Vec<WindowEntry>, RecordError> {
        let windows = Window::all()
            .map_err(|e| RecordError::SourceEnumeration(format!("failed to get windows: {}", e)))?;

        let mut entries = Vec::with_capacity(windows.len());
        for window in &windows {
            match window_entry(window) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::debug!("skipping unreadable window: {}", e),
            }
        }
        Ok(entries)
    }
}

fn window_entry(window: &Window) -> Result<WindowEntry, String> {
    Ok(WindowEntry {
        id: window.id().map_err(|e| e.to_string())?,
        title: window.title().map_err(|e| e.to_string())?,
        app_name: window.app_name().unwrap_or_default(),
        is_minimized: window.is_minimized().unwrap_or(false),
    })
}

impl SourceEnumerator for DesktopSourceEnumerator {
    fn list(&self, kinds: &[SourceKind]) -> Result<Vec<CaptureSource>, RecordError> {
        let monitors = if kinds.contains(&SourceKind::Screen) {
            Self::monitors()?
        } else {
            Vec::new()
        };
        let windows = if kinds.contains(&SourceKind::Window) {
            Self::windows()?
        } else {
            Vec::new()
        };

        log::debug!(
            "desktop snapshot: {} monitors, {} windows",
            monitors.len(),
            windows.len()
        );
        Ok(sources::build_sources(kinds, &monitors, &windows))
    }
}
