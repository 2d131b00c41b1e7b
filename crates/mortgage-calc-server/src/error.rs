use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mortgage_calc_core::MortgageError;
use thiserror::Error;

use crate::response::ApiResponse;

/// Every way a request can fail, rendered as `{"result":"fail","message":...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Mortgage(#[from] MortgageError),

    #[error("malformed query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("no such endpoint: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Mortgage(MortgageError::SerializationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Validation failures are all reported as 406, like the original service.
            ApiError::Mortgage(_) | ApiError::Query(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        format!("Error: {self}")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(ApiResponse::fail(self.message()))).into_response()
    }
}
