// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Maps the four failure classes of the service: boundary validation (400),
/// missing rows (404), store-side constraint rejections (400 with the store
/// detail), and everything else (500/503 with the real cause logged, never
/// leaked to the client).
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation {
        message: String,
        details: Vec<String>,
    },
    Constraint {
        message: String,
        detail: Option<String>,
    },

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),

    // 503 Service Unavailable
    Unavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Constraint { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation { message, .. } => message,
            ApiError::Constraint { message, .. } => message,
            ApiError::NotFound(msg) => msg,
            ApiError::Internal(msg) => msg,
            ApiError::Unavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body: `{"error": ...}` plus optional details.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation { message, details } => {
                let mut body = json!({ "error": message });
                if !details.is_empty() {
                    body["details"] = json!(details);
                }
                body
            }
            ApiError::Constraint { message, detail } => {
                let mut body = json!({ "error": message });
                if let Some(detail) = detail {
                    body["details"] = json!([detail]);
                }
                body
            }
            _ => json!({ "error": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn constraint(message: impl Into<String>, detail: Option<String>) -> Self {
        ApiError::Constraint {
            message: message.into(),
            detail,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        ApiError::Unavailable(message.into())
    }
}

// Centralized store-error classification: constraint rejections are the
// client's fault (400, with the store detail); everything else is a 500 with
// the real error logged but not exposed.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::not_found("Record not found."),
            sqlx::Error::Database(db_err) => {
                use sqlx::error::ErrorKind;
                match db_err.kind() {
                    ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => ApiError::constraint(
                        "Request violates a data constraint.",
                        Some(db_err.message().to_string()),
                    ),
                    _ => {
                        tracing::error!("Database error: {}", db_err.message());
                        ApiError::internal("Server error")
                    }
                }
            }
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal("Server error")
            }
        }
    }
}

impl From<crate::database::DatabaseError> for ApiError {
    fn from(err: crate::database::DatabaseError) -> Self {
        match err {
            crate::database::DatabaseError::Sqlx(e) => e.into(),
            other => {
                tracing::error!("Database configuration error: {}", other);
                ApiError::unavailable("Database temporarily unavailable")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert_eq!(
            ApiError::validation("bad", vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::constraint("bad", None).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_body_carries_details() {
        let err = ApiError::validation(
            "All fields are required.",
            vec!["event_name is required".to_string()],
        );
        let body = err.to_json();
        assert_eq!(body["error"], "All fields are required.");
        assert_eq!(body["details"][0], "event_name is required");
    }

    #[test]
    fn not_found_body_is_flat() {
        let body = ApiError::not_found("Sorry, event not found.").to_json();
        assert_eq!(body, serde_json::json!({ "error": "Sorry, event not found." }));
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
