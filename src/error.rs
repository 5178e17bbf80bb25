use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

/// Error body shape shared by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Employee with ID 'EMP001' not found.")]
    pub detail: String,
}

#[derive(Debug, Display)]
pub enum ApiError {
    /// A referenced employee does not exist.
    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// A uniqueness rule was violated (employee_id, email, or employee+date).
    #[display(fmt = "{}", _0)]
    Conflict(String),

    /// Malformed input, rejected before any store access.
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// Unexpected storage failure. Logged; the caller gets a generic message.
    #[display(fmt = "Internal server error")]
    Database(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            error!(error = %e, "Database operation failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

impl ApiError {
    /// Remaps a storage-level unique violation (a write that lost a race with
    /// a concurrent request) onto the conflict message the pre-check would
    /// have produced.
    pub fn on_unique_violation(self, conflict_message: impl Into<String>) -> Self {
        if let ApiError::Database(sqlx::Error::Database(db_err)) = &self {
            if db_err.is_unique_violation() {
                return ApiError::Conflict(conflict_message.into());
            }
        }
        self
    }
}
