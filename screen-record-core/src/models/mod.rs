pub mod codec;
pub mod config;
pub mod controls;
pub mod error;
pub mod recording_result;
pub mod source;
pub mod state;
