//! Configuration management with environment variable support.

mod base;
mod error;

pub use base::ServerConfig;
pub use error::ConfigError;
