// grocery_api/src/state.rs
use crate::db::Store;
use std::sync::Arc;

/// Shared by every request handler. The store is constructed once at startup
/// and closed by `main` after the server stops.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn Store>,
}

impl AppState {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self { store }
  }
}
