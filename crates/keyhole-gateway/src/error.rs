use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keyhole_core::EngineError;
use serde::Serialize;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Wraps an [`EngineError`] for translation into an HTTP response.
#[derive(Debug)]
pub struct ApiError(EngineError);

/// JSON error body: `{"detail": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl From<EngineError> for ApiError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EngineError::InvalidUrl(_) | EngineError::InvalidShortCode(_) => {
                StatusCode::BAD_REQUEST
            }
            EngineError::NotFound(_) => StatusCode::NOT_FOUND,
            EngineError::GenerationExhausted { .. } | EngineError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_input_maps_to_400() {
        let response =
            ApiError::from(EngineError::InvalidUrl("nope".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_code_maps_to_404() {
        let response =
            ApiError::from(EngineError::NotFound("abc123".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn exhausted_generation_maps_to_500() {
        let response =
            ApiError::from(EngineError::GenerationExhausted { attempts: 16 }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
