// grocery_api/src/main.rs

use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use grocery_api::db::{PgStore, Store};
use grocery_api::{web, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default level
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  tracing::info!("Starting grocery API server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    e
  })?;

  let store = PgStore::connect(&app_config.database_url).await.map_err(|e| {
    tracing::error!(error = %e, "Failed to connect to the database.");
    e
  })?;

  let store = Arc::new(store);
  let app_state = AppState::new(store.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let served = HttpServer::new(move || web::build_app(app_state.clone()))
    .bind(&server_address)
    .with_context(|| format!("Failed to bind {}", server_address))?
    .run()
    .await;

  // The server has stopped (signal or error); release the store either way.
  store.close().await;
  tracing::info!("Server stopped.");

  served.context("Server terminated with an error")
}
