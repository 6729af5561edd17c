//! Browser adapters for the stitch-core ports.

pub mod http;
pub mod storage;
pub mod timer;

pub use http::HttpBackend;
pub use timer::GlooTimer;
