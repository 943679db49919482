pub mod persistence_sink;
pub mod preview_surface;
pub mod recorder_delegate;
pub mod source_enumerator;
pub mod stream_provider;
