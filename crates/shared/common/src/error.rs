//! Unified error handling for HTTP and gRPC.
//!
//! Provides a single error type that can be converted to:
//! - Axum HTTP responses (for the gateway)
//! - Tonic gRPC status codes (for content-service)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tonic::Status;

const NOT_FOUND_SUFFIX: &str = " not found";

/// Name reported to clients when a downstream gRPC call is unavailable.
const UPSTREAM_SERVICE: &str = "upstream";

/// Application error types with support for both HTTP and gRPC.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    /// Lookup matched no record; carries the entity name ("Post", "Category")
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // gRPC specific
    #[error("Service unavailable")]
    ServiceUnavailable(String),

    #[error("gRPC error: {0}")]
    Grpc(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Grpc(_) => "GRPC_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::NotFound(_) | AppError::BadRequest(_) => self.to_string(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::ServiceUnavailable(service) => {
                tracing::error!("Service unavailable: {}", service);
                format!("Service {} is unavailable", service)
            }
            AppError::Grpc(msg) => {
                tracing::error!("gRPC error: {}", msg);
                "A service communication error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::NotFound(_) => tonic::Code::NotFound,
            AppError::BadRequest(_) => tonic::Code::InvalidArgument,
            AppError::ServiceUnavailable(_) => tonic::Code::Unavailable,
            _ => tonic::Code::Internal,
        };

        Status::new(code, err.user_message())
    }
}

impl From<Status> for AppError {
    fn from(status: Status) -> Self {
        match status.code() {
            tonic::Code::NotFound => {
                let entity = status
                    .message()
                    .strip_suffix(NOT_FOUND_SUFFIX)
                    .filter(|e| !e.is_empty())
                    .unwrap_or("Resource");
                AppError::NotFound(entity.to_string())
            }
            tonic::Code::InvalidArgument => AppError::BadRequest(status.message().to_string()),
            tonic::Code::Unavailable => {
                tracing::warn!("Downstream call unavailable: {}", status.message());
                AppError::service_unavailable(UPSTREAM_SERVICE)
            }
            _ => AppError::Grpc(status.message().to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(entity))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn service_unavailable(service: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(service.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_and_grpc_not_found() {
        let err = AppError::not_found("Post");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");

        let status = Status::from(AppError::not_found("Post"));
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "Post not found");
    }

    #[test]
    fn not_found_survives_the_grpc_hop() {
        let status = Status::from(AppError::not_found("Category"));
        let err = AppError::from(status);
        assert!(matches!(err, AppError::NotFound(ref entity) if entity == "Category"));
        assert_eq!(err.to_string(), "Category not found");
    }

    #[test]
    fn bare_not_found_status_names_a_resource() {
        let err = AppError::from(Status::not_found(""));
        assert_eq!(err.to_string(), "Resource not found");
    }

    #[test]
    fn internal_details_are_hidden() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "An internal error occurred");

        let status = Status::from(AppError::internal("boom"));
        assert_eq!(status.code(), tonic::Code::Internal);
        assert!(!status.message().contains("boom"));
    }

    #[test]
    fn unavailable_status_maps_to_503() {
        let err = AppError::from(Status::unavailable("content-service"));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unavailable_transport_message_is_hidden() {
        let err = AppError::from(Status::unavailable(
            "tcp connect error: Connection refused (os error 111)",
        ));
        let message = err.user_message();

        assert_eq!(message, "Service upstream is unavailable");
        assert!(!message.contains("tcp"));
        assert!(!err.to_string().contains("refused"));
    }

    #[test]
    fn option_ext_names_the_missing_entity() {
        let missing: Option<i64> = None;
        let err = missing.ok_or_not_found("Post").unwrap_err();
        assert_eq!(err.to_string(), "Post not found");
        assert_eq!(Some(7).ok_or_not_found("Post").unwrap(), 7);
    }

    #[tokio::test]
    async fn http_body_carries_code_and_message() {
        let response = AppError::not_found("Post").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Post not found");
    }
}
