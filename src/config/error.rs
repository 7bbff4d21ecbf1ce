use thiserror::Error;

/// Error returned when the service configuration cannot be loaded.
///
/// Any of these is fatal: the service must not start serving traffic.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    /// `ZEGO_APP_ID` is not a non-zero unsigned 32-bit integer.
    #[error("invalid ZEGO_APP_ID: {0:?}")]
    InvalidAppId(String),
    /// `PORT` is not a valid port number.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}
