pub mod config;
pub mod logging;

// Policy core and transport.
pub mod cache;
pub mod client;
pub mod retry;
