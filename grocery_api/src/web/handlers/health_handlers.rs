// grocery_api/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::error;

use crate::errors::AppError;
use crate::state::AppState;

pub async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.store.ping().await.map_err(|e| {
    error!("Health check failed: {}", e);
    AppError::store("Database is unreachable.", e)
  })?;
  Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
