//! Mapping of request failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::token::TokenError;

/// Failure while handling a token request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("{name} must be an integer number of seconds")]
    NotAnInteger { name: &'static str },
    #[error("{name} must be between {min} and {max} seconds")]
    OutOfRange {
        name: &'static str,
        min: u32,
        max: u32,
    },
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
    #[error("Failed to generate token: {0}")]
    TokenGeneration(#[from] TokenError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TokenGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "token request failed");
        } else {
            tracing::warn!(error = %self, "rejected token request");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingParameter("userId").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::TokenGeneration(TokenError::InvalidSecret).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::OutOfRange {
                name: "effectiveTime",
                min: 60,
                max: 86400
            }
            .to_string(),
            "effectiveTime must be between 60 and 86400 seconds"
        );
        assert_eq!(
            ApiError::TokenGeneration(TokenError::Backend("boom".into())).to_string(),
            "Failed to generate token: boom"
        );
    }
}
