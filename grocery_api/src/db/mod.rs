// grocery_api/src/db/mod.rs

//! Access to the relational store holding `products` and `purchases`.

use async_trait::async_trait;

use crate::models::{NewProduct, NewPurchase, Product, Purchase};

pub mod postgres;

pub use postgres::PgStore;

/// Result of a store call. Driver errors are passed through untouched.
pub type StoreResult<T> = std::result::Result<T, sqlx::Error>;

/// One parameterized statement per operation.
#[async_trait]
pub trait Store: Send + Sync {
  async fn ping(&self) -> StoreResult<()>;

  /// Returns the row as stored, with the id assigned by the store.
  async fn insert_product(&self, product: &NewProduct) -> StoreResult<Product>;

  /// Returns the row as stored, or `None` if no product has `id`.
  async fn update_product(&self, id: i64, product: &NewProduct) -> StoreResult<Option<Product>>;

  async fn delete_product(&self, id: i64) -> StoreResult<()>;

  async fn list_products(&self) -> StoreResult<Vec<Product>>;

  async fn get_product(&self, id: i64) -> StoreResult<Option<Product>>;

  /// Inserts every row in a single statement and returns the id of the first.
  async fn insert_purchases(&self, rows: &[NewPurchase]) -> StoreResult<i64>;

  async fn list_purchases(&self) -> StoreResult<Vec<Purchase>>;

  async fn delete_purchase(&self, id: i64) -> StoreResult<()>;

  /// Releases the underlying connections. Called once on shutdown.
  async fn close(&self);
}
