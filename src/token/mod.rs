//! Token issuance for client SDKs.
//!
//! The HTTP endpoint only depends on [`TokenIssuer`]; [`Token04Issuer`] is
//! the default implementation producing version 04 tokens.

mod error;
mod token04;

pub use error::TokenError;
pub use token04::{Token04Issuer, TokenInfo};

/// Capability that turns an authenticated user into a client SDK token.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `user_id`, valid for `effective_seconds`.
    ///
    /// `payload` is opaque application data embedded in the token.
    fn generate(
        &self,
        app_id: u32,
        user_id: &str,
        secret: &str,
        effective_seconds: u32,
        payload: &str,
    ) -> Result<String, TokenError>;
}
