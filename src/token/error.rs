use thiserror::Error;

/// Error returned by a [`TokenIssuer`](super::TokenIssuer).
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("appID invalid")]
    InvalidAppId,
    #[error("userID invalid")]
    InvalidUserId,
    #[error("secret must be a 32 byte string")]
    InvalidSecret,
    #[error("effectiveTimeInSeconds invalid")]
    InvalidEffectiveTime,
    /// The encrypted token info does not fit the 16-bit length field.
    #[error("encrypted token info is {len} bytes, limit is {max}")]
    TooLarge { len: usize, max: usize },
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
    #[error("system clock is set before the unix epoch")]
    Clock,
    #[error("token info encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("token encryption failed")]
    Encrypt,
    #[error("token decryption failed")]
    Decrypt,
    #[error("malformed token: {0}")]
    Malformed(&'static str),
    /// Failure reported by a non-default issuer.
    #[error("{0}")]
    Backend(String),
}
