// grocery_api/src/db/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{info, instrument};

use super::{Store, StoreResult};
use crate::models::{NewProduct, NewPurchase, Product, Purchase};

/// Postgres-backed store sharing one connection pool across all requests.
#[derive(Clone, Debug)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> StoreResult<Self> {
    let pool = PgPool::connect(database_url).await?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

#[async_trait]
impl Store for PgStore {
  async fn ping(&self) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }

  #[instrument(name = "store::insert_product", skip(self, product))]
  async fn insert_product(&self, product: &NewProduct) -> StoreResult<Product> {
    sqlx::query_as(
      "INSERT INTO products (name, price, description, image_url, category) VALUES ($1, $2, $3, $4, $5) \
       RETURNING id, name, price, description, image_url, category",
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(&product.image_url)
    .bind(&product.category)
    .fetch_one(&self.pool)
    .await
  }

  #[instrument(name = "store::update_product", skip(self, product))]
  async fn update_product(&self, id: i64, product: &NewProduct) -> StoreResult<Option<Product>> {
    sqlx::query_as(
      "UPDATE products SET name = $1, price = $2, description = $3, image_url = $4, category = $5 WHERE id = $6 \
       RETURNING id, name, price, description, image_url, category",
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(&product.image_url)
    .bind(&product.category)
    .bind(id)
    .fetch_optional(&self.pool)
    .await
  }

  #[instrument(name = "store::delete_product", skip(self))]
  async fn delete_product(&self, id: i64) -> StoreResult<()> {
    sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn list_products(&self) -> StoreResult<Vec<Product>> {
    sqlx::query_as("SELECT id, name, price, description, image_url, category FROM products ORDER BY id")
      .fetch_all(&self.pool)
      .await
  }

  #[instrument(name = "store::get_product", skip(self))]
  async fn get_product(&self, id: i64) -> StoreResult<Option<Product>> {
    sqlx::query_as("SELECT id, name, price, description, image_url, category FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
  }

  #[instrument(name = "store::insert_purchases", skip(self, rows), fields(rows = rows.len()))]
  async fn insert_purchases(&self, rows: &[NewPurchase]) -> StoreResult<i64> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
      "INSERT INTO purchases (user_name, product_name, price, phone, location, payment_method, total_amount) ",
    );
    builder.push_values(rows, |mut b, row| {
      b.push_bind(row.user_name.clone())
        .push_bind(row.product_name.clone())
        .push_bind(row.price)
        .push_bind(row.phone.clone())
        .push_bind(row.location.clone())
        .push_bind(row.payment_method.clone())
        .push_bind(row.total_amount);
    });
    builder.push(" RETURNING id");

    let ids: Vec<i64> = builder.build_query_scalar::<i64>().fetch_all(&self.pool).await?;
    ids.into_iter().min().ok_or(sqlx::Error::RowNotFound)
  }

  async fn list_purchases(&self) -> StoreResult<Vec<Purchase>> {
    sqlx::query_as(
      "SELECT id, user_name, product_name, price, phone, location, payment_method, total_amount FROM purchases ORDER BY id",
    )
      .fetch_all(&self.pool)
      .await
  }

  #[instrument(name = "store::delete_purchase", skip(self))]
  async fn delete_purchase(&self, id: i64) -> StoreResult<()> {
    sqlx::query("DELETE FROM purchases WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn close(&self) {
    self.pool.close().await;
    info!("Database connections closed.");
  }
}
