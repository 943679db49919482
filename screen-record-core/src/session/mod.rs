pub mod capture_session;
pub mod chunk_sink;
pub mod controller;
