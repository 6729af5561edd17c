pub mod ports;
pub mod event_bus;
pub mod timeout;
pub mod credentials;
pub mod session;
pub mod library;
