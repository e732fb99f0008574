//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, OrderStatus, PlanError};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request from the client.
    #[error("{0}")]
    BadRequest(String),

    /// Order domain error.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Mix planning error.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Plan(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = serde_json::json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    match &err {
        DomainError::Validation(reason) => (StatusCode::BAD_REQUEST, reason.reason()),
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::InvalidStatus(_) => {
            let expected: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::as_str).collect();
            (
                StatusCode::BAD_REQUEST,
                format!("{err}. Expected one of: {}", expected.join(", ")),
            )
        }
        DomainError::Internal(detail) => {
            tracing::error!(error = %detail, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::OrderId;
    use domain::ValidationError;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(DomainError::Validation(ValidationError::GuestsMissing).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::NotFound(OrderId::new(3)).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::InvalidStatus("archived".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Internal("duplicate id".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(PlanError::EmptySelection.into()),
            StatusCode::BAD_REQUEST
        );
    }
}
