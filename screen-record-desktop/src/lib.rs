//! # screen-record-desktop
//!
//! Desktop source enumeration for screen-record.
//!
//! Provides:
//! - `sources`: mapping of monitors and windows to `CaptureSource` entries
//!   (ids, display names, filtering of minimized and unnamed windows)
//! - `DesktopSourceEnumerator`: `SourceEnumerator` over the live desktop via
//!   xcap (requires the `xcap` feature)
//!
//! ## Usage
//! ```ignore
//! use screen_record_core::{CaptureController, FileSink};
//! use screen_record_desktop::DesktopSourceEnumerator;
//!
//! let controller = CaptureController::new(
//!     DesktopSourceEnumerator::new(),
//!     host_stream_provider,
//!     FileSink::in_directory(videos_dir),
//! );
//! let menu = controller.source_menu()?;
//! ```

pub mod sources;
#[cfg(feature = "xcap")]
pub mod xcap_enumerator;

pub use sources::{MonitorEntry, WindowEntry};
#[cfg(feature = "xcap")]
pub use xcap_enumerator::DesktopSourceEnumerator;
