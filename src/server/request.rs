//! Query parameters of the token endpoint.

use serde::Deserialize;

use super::error::ApiError;

pub const DEFAULT_EFFECTIVE_TIME: u32 = 3600;
pub const MIN_EFFECTIVE_TIME: u32 = 60;
pub const MAX_EFFECTIVE_TIME: u32 = 86400;
pub const DEFAULT_PAYLOAD: &str = "{}";

/// Raw query string of `GET /api/zego/token`.
///
/// Every field is optional here so that missing and malformed values get
/// our own error messages instead of the extractor's.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenQuery {
    pub user_id: Option<String>,
    pub effective_time: Option<String>,
    pub payload: Option<String>,
}

/// A validated token request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub user_id: String,
    pub effective_time: u32,
    pub payload: String,
}

impl TryFrom<TokenQuery> for TokenRequest {
    type Error = ApiError;

    fn try_from(query: TokenQuery) -> Result<Self, Self::Error> {
        let user_id = query
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingParameter("userId"))?;

        let effective_time = match query.effective_time.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_EFFECTIVE_TIME,
            Some(raw) => {
                let seconds: i64 = raw.parse().map_err(|_| ApiError::NotAnInteger {
                    name: "effectiveTime",
                })?;
                let bounds = i64::from(MIN_EFFECTIVE_TIME)..=i64::from(MAX_EFFECTIVE_TIME);
                if !bounds.contains(&seconds) {
                    return Err(ApiError::OutOfRange {
                        name: "effectiveTime",
                        min: MIN_EFFECTIVE_TIME,
                        max: MAX_EFFECTIVE_TIME,
                    });
                }
                seconds as u32
            }
        };

        let payload = query
            .payload
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PAYLOAD.to_string());

        Ok(Self {
            user_id,
            effective_time,
            payload,
        })
    }
}
