//! Conversion of desktop monitors and windows into capture sources.
//!
//! Screens are identified as `screen:<index>` in enumeration order and
//! windows as `window:<native id>`. A single monitor is named
//! `Entire screen`; several are named `Screen 1`, `Screen 2`, ...

use screen_record_core::{CaptureSource, SourceKind};

pub const ENTIRE_SCREEN_NAME: &str = "Entire screen";

/// A monitor as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorEntry {
    pub name: String,
    pub is_primary: bool,
}

/// A top-level window as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub id: u32,
    pub title: String,
    pub app_name: String,
    pub is_minimized: bool,
}

impl WindowEntry {
    /// Minimized windows produce no frames and are not offered.
    pub fn is_capturable(&self) -> bool {
        !self.is_minimized && !self.display_name().is_empty()
    }

    /// Window title, falling back to the application name.
    pub fn display_name(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            self.app_name.trim()
        } else {
            title
        }
    }
}

pub fn screen_source_id(index: usize) -> String {
    format!("screen:{}", index)
}

pub fn window_source_id(id: u32) -> String {
    format!("window:{}", id)
}

pub fn screen_display_name(index: usize, monitor_count: usize) -> String {
    if monitor_count <= 1 {
        ENTIRE_SCREEN_NAME.to_string()
    } else {
        format!("Screen {}", index + 1)
    }
}

pub fn screen_sources(monitors: &[MonitorEntry]) -> Vec<CaptureSource> {
    monitors
        .iter()
        .enumerate()
        .map(|(index, _)| {
            CaptureSource::new(
                screen_source_id(index),
                screen_display_name(index, monitors.len()),
                SourceKind::Screen,
            )
        })
        .collect()
}

pub fn window_sources(windows: &[WindowEntry]) -> Vec<CaptureSource> {
    windows
        .iter()
        .filter(|w| w.is_capturable())
        .map(|w| CaptureSource::new(window_source_id(w.id), w.display_name(), SourceKind::Window))
        .collect()
}

/// Sources of the requested kinds, grouped in the order `kinds` lists them.
pub fn build_sources(
    kinds: &[SourceKind],
    monitors: &[MonitorEntry],
    windows: &[WindowEntry],
) -> Vec<CaptureSource> {
    let mut sources = Vec::new();
    for kind in dedup_kinds(kinds) {
        match kind {
            SourceKind::Window => sources.extend(window_sources(windows)),
            SourceKind::Screen => sources.extend(screen_sources(monitors)),
        }
    }
    sources
}

fn dedup_kinds(kinds: &[SourceKind]) -> Vec<SourceKind> {
    let mut unique = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if !unique.contains(kind) {
            unique.push(*kind);
        }
    }
    unique
}
