// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::App;
use async_trait::async_trait;
use grocery_api::db::{Store, StoreResult};
use grocery_api::models::{NewProduct, NewPurchase, Product, Purchase};
use grocery_api::AppState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Tables {
  next_product_id: i64,
  next_purchase_id: i64,
  products: Vec<Product>,
  purchases: Vec<Purchase>,
}

/// In-memory stand-in for the relational store. `set_failing(true)` makes
/// every call return a driver error.
#[derive(Default)]
pub struct MemoryStore {
  tables: Mutex<Tables>,
  failing: AtomicBool,
  closed: AtomicBool,
}

impl MemoryStore {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn set_failing(&self, failing: bool) {
    self.failing.store(failing, Ordering::SeqCst);
  }

  pub fn is_closed(&self) -> bool {
    self.closed.load(Ordering::SeqCst)
  }

  pub fn products(&self) -> Vec<Product> {
    self.tables.lock().products.clone()
  }

  pub fn purchases(&self) -> Vec<Purchase> {
    self.tables.lock().purchases.clone()
  }

  fn check(&self) -> StoreResult<()> {
    if self.failing.load(Ordering::SeqCst) {
      return Err(sqlx::Error::Protocol("store is offline".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn ping(&self) -> StoreResult<()> {
    self.check()
  }

  async fn insert_product(&self, product: &NewProduct) -> StoreResult<Product> {
    self.check()?;
    let mut tables = self.tables.lock();
    tables.next_product_id += 1;
    let stored = product.clone().with_id(tables.next_product_id);
    tables.products.push(stored.clone());
    Ok(stored)
  }

  async fn update_product(&self, id: i64, product: &NewProduct) -> StoreResult<Option<Product>> {
    self.check()?;
    let mut tables = self.tables.lock();
    Ok(tables.products.iter_mut().find(|p| p.id == id).map(|existing| {
      *existing = product.clone().with_id(id);
      existing.clone()
    }))
  }

  async fn delete_product(&self, id: i64) -> StoreResult<()> {
    self.check()?;
    self.tables.lock().products.retain(|p| p.id != id);
    Ok(())
  }

  async fn list_products(&self) -> StoreResult<Vec<Product>> {
    self.check()?;
    Ok(self.products())
  }

  async fn get_product(&self, id: i64) -> StoreResult<Option<Product>> {
    self.check()?;
    Ok(self.tables.lock().products.iter().find(|p| p.id == id).cloned())
  }

  async fn insert_purchases(&self, rows: &[NewPurchase]) -> StoreResult<i64> {
    self.check()?;
    let mut tables = self.tables.lock();
    let first_id = tables.next_purchase_id + 1;
    for row in rows {
      tables.next_purchase_id += 1;
      let id = tables.next_purchase_id;
      tables.purchases.push(row.clone().with_id(id));
    }
    Ok(first_id)
  }

  async fn list_purchases(&self) -> StoreResult<Vec<Purchase>> {
    self.check()?;
    Ok(self.purchases())
  }

  async fn delete_purchase(&self, id: i64) -> StoreResult<()> {
    self.check()?;
    self.tables.lock().purchases.retain(|p| p.id != id);
    Ok(())
  }

  async fn close(&self) {
    self.closed.store(true, Ordering::SeqCst);
  }
}

pub fn app(
  store: Arc<MemoryStore>,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  grocery_api::web::build_app(AppState::new(store))
}

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}
