// grocery_api/src/web/handlers/purchase_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{error, info, instrument};

use crate::errors::AppError;
use crate::models::PurchasePayload;
use crate::services::purchase_service;
use crate::state::AppState;

#[instrument(name = "handler::create_purchase", skip(app_state, payload))]
pub async fn create_purchase_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<PurchasePayload>,
) -> Result<HttpResponse, AppError> {
  let rows = purchase_service::prepare_purchase(payload.into_inner())?;

  let purchase_id = app_state.store.insert_purchases(&rows).await.map_err(|e| {
    error!("Error adding purchase: {}", e);
    AppError::store("Failed to add purchase.", e)
  })?;

  info!(purchase_id, rows = rows.len(), "Purchase recorded.");
  Ok(HttpResponse::Created().json(json!({
      "message": "Purchase successfully recorded.",
      "purchaseId": purchase_id
  })))
}

#[instrument(name = "handler::list_purchases", skip(app_state))]
pub async fn list_purchases_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let purchases = app_state.store.list_purchases().await.map_err(|e| {
    error!("Error fetching purchases: {}", e);
    AppError::store("Failed to fetch purchases.", e)
  })?;

  Ok(HttpResponse::Ok().json(purchases))
}

#[instrument(name = "handler::delete_purchase", skip(app_state, path), fields(purchase_id = %path.as_ref()))]
pub async fn delete_purchase_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let Ok(purchase_id) = path.parse::<i64>() else {
    return Ok(HttpResponse::NoContent().finish());
  };

  app_state.store.delete_purchase(purchase_id).await.map_err(|e| {
    error!("Error deleting purchase {}: {}", purchase_id, e);
    AppError::store("Failed to delete purchase.", e)
  })?;

  Ok(HttpResponse::NoContent().finish())
}
