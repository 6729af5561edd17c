pub mod message;
pub mod credentials;
pub mod clip;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::StitchError;
pub type Result<T> = std::result::Result<T, StitchError>;
