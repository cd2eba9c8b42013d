// grocery_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::product::PRODUCT_NOT_FOUND;
use crate::models::ProductPayload;
use crate::state::AppState;

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product = payload.into_inner().validate()?;

  let created = app_state.store.insert_product(&product).await.map_err(|e| {
    error!("Error adding product: {}", e);
    AppError::store("Failed to add product.", e)
  })?;

  info!("Product {} created.", created.id);
  Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = payload.into_inner().validate()?;

  let updated = app_state
    .store
    .update_product(product_id, &product)
    .await
    .map_err(|e| {
      error!("Error updating product {}: {}", product_id, e);
      AppError::store("Failed to update product.", e)
    })?;

  match updated {
    Some(updated) => {
      info!("Product {} updated.", product_id);
      Ok(HttpResponse::Ok().json(updated))
    }
    None => {
      warn!("Product with ID {} not found for update.", product_id);
      Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  // An id that is not a number matches no row.
  let Ok(product_id) = path.parse::<i64>() else {
    return Ok(HttpResponse::NoContent().finish());
  };

  app_state.store.delete_product(product_id).await.map_err(|e| {
    error!("Error deleting product {}: {}", product_id, e);
    AppError::store("Failed to delete product.", e)
  })?;

  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list_products().await.map_err(|e| {
    error!("Error fetching products: {}", e);
    AppError::store("Failed to fetch products.", e)
  })?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product = app_state.store.get_product(product_id).await.map_err(|e| {
    error!("Error fetching product {}: {}", product_id, e);
    AppError::store("Failed to fetch product.", e)
  })?;

  match product {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }
  }
}
