// grocery_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Any failure reported by the relational store. `message` names the
  /// operation that failed; the driver error is passed to the caller as-is.
  #[error("{message} Database Error: {source}")]
  Store {
    message: String,
    #[source]
    source: sqlx::Error,
  },

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  pub fn store(message: impl Into<String>, source: sqlx::Error) -> Self {
    AppError::Store {
      message: message.into(),
      source,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Store { .. } | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let mut builder = HttpResponse::build(self.status_code());
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => builder.json(json!({ "message": m })),
      AppError::Store { message, source } => {
        // Store errors are already logged where they are raised.
        builder.json(json!({ "message": message, "error": source.to_string() }))
      }
      AppError::Config(m) => {
        tracing::error!(application_error = %self, "Responding with configuration error");
        builder.json(json!({ "message": "Configuration issue", "error": m }))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
