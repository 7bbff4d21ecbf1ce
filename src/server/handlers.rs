use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;

use super::error::ApiError;
use super::request::{TokenQuery, TokenRequest};
use super::AppState;

/// `GET /api/zego/token` - issue a token and return it as plain text.
pub(crate) async fn issue_token(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let request = TokenRequest::try_from(query)?;

    let token = state.issuer.generate(
        state.config.app_id,
        &request.user_id,
        &state.config.server_secret,
        request.effective_time,
        &request.payload,
    )?;

    tracing::info!(
        user_id = %request.user_id,
        effective_time = request.effective_time,
        "issued token"
    );
    Ok(token)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HealthResponse {
    status: &'static str,
    app_id: u32,
}

/// `GET /health`
pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        app_id: state.config.app_id,
    })
}
