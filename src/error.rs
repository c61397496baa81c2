use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Google Maps API key is not set.")]
    Configuration,

    #[error("Origin or destination is missing.")]
    Validation,

    #[error("Directions API failed with status: {status}")]
    Upstream { status: String },

    #[error("{0}")]
    MalformedUpstreamResponse(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Label used for the `outcome` dimension of lookup metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            AppError::Configuration => "configuration_error",
            AppError::Validation => "validation_error",
            AppError::Upstream { .. } => "upstream_error",
            AppError::MalformedUpstreamResponse(_) => "malformed_upstream_response",
            AppError::Unexpected(_) | AppError::Internal(_) => "unexpected_error",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

// Every failure collapses to 400; callers tell them apart by message only.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn messages_match_client_contract() {
        assert_eq!(
            AppError::Configuration.to_string(),
            "Google Maps API key is not set."
        );
        assert_eq!(
            AppError::Validation.to_string(),
            "Origin or destination is missing."
        );
        assert_eq!(
            AppError::Upstream {
                status: "ZERO_RESULTS".to_string()
            }
            .to_string(),
            "Directions API failed with status: ZERO_RESULTS"
        );
    }

    #[test]
    fn every_variant_maps_to_bad_request() {
        let errors = vec![
            AppError::Configuration,
            AppError::Validation,
            AppError::Upstream {
                status: "REQUEST_DENIED".to_string(),
            },
            AppError::MalformedUpstreamResponse("no routes".to_string()),
            AppError::Unexpected("boom".to_string()),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}
