// food_service/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Missing required fields, malformed identifiers, unparseable bodies.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// A search that matched nothing. Rendered with a `message` key instead of `error`.
  #[error("No Matches: {0}")]
  NoMatches(String),

  /// Business rule refusal, e.g. editing a frozen order.
  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// A store call failed. `context` is the message the client sees; `source` stays in the logs.
  #[error("{context}: {source}")]
  Store {
    context: &'static str,
    #[source]
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Builds a `map_err` adapter that tags a store failure with the route's 500 message.
  pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |source| AppError::Store { context, source }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) | AppError::NoMatches(_) => StatusCode::NOT_FOUND,
      AppError::Forbidden(_) => StatusCode::FORBIDDEN,
      AppError::Config(_) | AppError::Store { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::debug!(application_error = %self, "Responding with client error");
    }

    let body = match self {
      AppError::Validation(m) | AppError::NotFound(m) | AppError::Forbidden(m) => json!({ "error": m }),
      AppError::NoMatches(m) => json!({ "message": m }),
      AppError::Store { context, .. } => json!({ "error": context }),
      AppError::Config(_) => json!({ "error": "Error de configuración" }),
      AppError::Internal(_) => json!({ "error": "Error interno del servidor" }),
    };
    HttpResponse::build(status).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
