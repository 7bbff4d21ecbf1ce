//! HTTP endpoint issuing tokens to client SDKs.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/zego/token?userId=..&effectiveTime=..&payload=..` | `200` token as `text/plain` |
//! | `GET /health` | `200` `{"status":"ok","appId":..}` |
//!
//! Validation failures answer `400` and issuer failures `500`, both with a
//! `{"error": "..."}` body.

mod error;
mod handlers;
mod request;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::config::ServerConfig;
use crate::token::TokenIssuer;

pub use error::ApiError;
pub use request::{
    TokenQuery, TokenRequest, DEFAULT_EFFECTIVE_TIME, DEFAULT_PAYLOAD, MAX_EFFECTIVE_TIME,
    MIN_EFFECTIVE_TIME,
};

pub const TOKEN_PATH: &str = "/api/zego/token";
pub const HEALTH_PATH: &str = "/health";

/// State shared by all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(config: ServerConfig, issuer: impl TokenIssuer + 'static) -> Self {
        Self {
            config: Arc::new(config),
            issuer: Arc::new(issuer),
        }
    }
}

/// Build the router serving the token and health endpoints.
///
/// # Example
///
/// ```rust,ignore
/// use zego_token::{router, AppState, ServerConfig, Token04Issuer};
///
/// let state = AppState::new(ServerConfig::from_env()?, Token04Issuer);
/// let app = router(state);
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(TOKEN_PATH, get(handlers::issue_token))
        .route(HEALTH_PATH, get(handlers::health))
        .with_state(state)
}
