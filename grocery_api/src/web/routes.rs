// grocery_api/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::models::product::{PRODUCT_FIELDS_REQUIRED, PRODUCT_NOT_FOUND};
use crate::services::purchase_service::INVALID_PURCHASE;
use crate::web::handlers::{health_handlers, product_handlers, purchase_handlers};

/// Malformed bodies are reported as validation failures with the given message.
fn json_config(message: &'static str) -> web::JsonConfig {
  web::JsonConfig::default().error_handler(move |err: error::JsonPayloadError, _req: &HttpRequest| {
    tracing::warn!("Rejected request body: {}", err);
    AppError::Validation(message.to_string()).into()
  })
}

/// A product id that is not a number cannot match any row.
fn product_path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
    tracing::warn!("Unparseable product id: {}", err);
    AppError::NotFound(PRODUCT_NOT_FOUND.to_string()).into()
  })
}

// Called from `build_app` to register every route under `/api`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_handlers::health_check_handler))
      .service(
        web::scope("/products")
          .app_data(json_config(PRODUCT_FIELDS_REQUIRED))
          .app_data(product_path_config())
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{id}", web::get().to(product_handlers::get_product_handler))
          .route("/{id}", web::put().to(product_handlers::update_product_handler))
          .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
      )
      .service(
        web::scope("/purchases")
          .app_data(json_config(INVALID_PURCHASE))
          .route("", web::get().to(purchase_handlers::list_purchases_handler))
          .route("", web::post().to(purchase_handlers::create_purchase_handler))
          .route("/{id}", web::delete().to(purchase_handlers::delete_purchase_handler)),
      ),
  );
}
