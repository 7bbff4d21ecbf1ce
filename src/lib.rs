//! ZEGO integration helpers - token issuance and server API signing.
//!
//! This crate provides the server-side pieces a ZEGO integration needs:
//!
//! - **signature**: Server API request signing (`md5(AppId + Nonce + Secret + Timestamp)`)
//! - **config**: Application id and server secret loaded from the environment
//! - **token**: The token issuance capability and its default token04 implementation
//! - **server**: HTTP endpoint issuing tokens to client SDKs, plus a health check
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `signature` - Server API signing helpers (enabled by default)
//! - `config` - Environment configuration (enabled by default)
//! - `token` - Token issuance (enabled by default)
//! - `server` - Token HTTP endpoint (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use zego_token::{init_tracing, router, AppState, ServerConfig, Token04Issuer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing("zego_token=debug,info");
//!     let config = ServerConfig::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     let app = router(AppState::new(config, Token04Issuer));
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#[cfg(feature = "signature")]
pub mod signature;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "token")]
pub mod token;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
#[cfg(feature = "signature")]
pub use signature::{generate_signature, generate_signature_nonce, NonceError, SignedParams};

#[cfg(feature = "config")]
pub use config::{ConfigError, ServerConfig};

#[cfg(feature = "token")]
pub use token::{Token04Issuer, TokenError, TokenInfo, TokenIssuer};

#[cfg(feature = "server")]
pub use server::{router, ApiError, AppState};

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
