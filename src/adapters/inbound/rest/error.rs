use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::shared::error::TrustLensError;

/// Error shape served to API clients
///
/// Every error body is `{"detail": "..."}`. Validation problems map to
/// 422, unknown products to 404 and everything else to an opaque 500;
/// internal detail only goes to the logs, never to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<TrustLensError> for ApiError {
    fn from(error: TrustLensError) -> Self {
        let status = match &error {
            TrustLensError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TrustLensError::ProductNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:#}", anyhow::Error::from(error));
            return Self {
                status,
                detail: "Internal server error".to_string(),
            };
        }

        Self {
            status,
            detail: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}
