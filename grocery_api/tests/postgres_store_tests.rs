// tests/postgres_store_tests.rs
//
// Runs against the database named by DATABASE_URL. Without it every test
// returns early.

use grocery_api::db::{PgStore, Store};
use grocery_api::models::{NewProduct, NewPurchase};
use rust_decimal::Decimal;

const SCHEMA: &str = include_str!("../schema.sql");

async fn setup_store() -> Option<PgStore> {
  let url = match std::env::var("DATABASE_URL") {
    Ok(url) => url,
    Err(_) => {
      eprintln!("DATABASE_URL not set, skipping Postgres store test");
      return None;
    }
  };

  let store = PgStore::connect(&url).await.expect("Failed to connect to database");
  sqlx::query("DROP TABLE IF EXISTS products, purchases")
    .execute(store.pool())
    .await
    .expect("Failed to drop tables");
  sqlx::raw_sql(SCHEMA)
    .execute(store.pool())
    .await
    .expect("Failed to create schema");
  Some(store)
}

fn oats() -> NewProduct {
  NewProduct {
    name: "Oats".to_string(),
    price: Decimal::new(275, 2),
    description: "Rolled oats".to_string(),
    image_url: "https://img.example/oats.png".to_string(),
    category: "Pantry".to_string(),
  }
}

fn purchase_row(product: &str, price: Decimal) -> NewPurchase {
  NewPurchase {
    user_name: "Ada".to_string(),
    product_name: product.to_string(),
    price,
    phone: "555-0100".to_string(),
    location: "12 Market St".to_string(),
    payment_method: "cash".to_string(),
    total_amount: Decimal::new(65, 1),
  }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
#[serial_test::serial]
async fn product_round_trip() {
  let Some(store) = setup_store().await else { return };

  assert!(store.list_products().await.unwrap().is_empty());

  let created = store.insert_product(&oats()).await.unwrap();
  let id = created.id;
  assert_eq!(created, oats().with_id(id));
  let fetched = store.get_product(id).await.unwrap().expect("product exists");
  assert_eq!(fetched, created);

  let mut changed = oats();
  changed.price = Decimal::new(300, 2);
  let updated = store.update_product(id, &changed).await.unwrap().expect("product exists");
  assert_eq!(updated.price, Decimal::new(300, 2));
  assert!(store.update_product(id + 1000, &changed).await.unwrap().is_none());
  assert_eq!(store.get_product(id).await.unwrap().unwrap(), updated);

  store.delete_product(id).await.unwrap();
  store.delete_product(id).await.unwrap();
  assert!(store.get_product(id).await.unwrap().is_none());

  store.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
#[serial_test::serial]
async fn purchase_rows_are_inserted_in_one_statement() {
  let Some(store) = setup_store().await else { return };

  let first_id = store
    .insert_purchases(&[
      purchase_row("Milk", Decimal::new(50, 1)),
      purchase_row("Bread", Decimal::new(15, 1)),
    ])
    .await
    .unwrap();

  let rows = store.list_purchases().await.unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].id, first_id);
  assert_eq!(rows[0].product_name, "Milk");
  assert_eq!(rows[1].price, Decimal::new(15, 1));
  assert!(rows.iter().all(|r| r.total_amount == Decimal::new(65, 1)));

  store.delete_purchase(first_id).await.unwrap();
  assert_eq!(store.list_purchases().await.unwrap().len(), 1);

  store.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
#[serial_test::serial]
async fn prices_are_stored_without_rounding() {
  let Some(store) = setup_store().await else { return };

  let mut fine = oats();
  fine.price = Decimal::new(3999, 3);
  let created = store.insert_product(&fine).await.unwrap();
  assert_eq!(created.price, Decimal::new(3999, 3));
  assert_eq!(store.get_product(created.id).await.unwrap().unwrap(), created);

  let mut large = oats();
  large.price = Decimal::new(12_345_678_901_234, 3);
  let updated = store.update_product(created.id, &large).await.unwrap().unwrap();
  assert_eq!(updated.price, Decimal::new(12_345_678_901_234, 3));
  assert_eq!(store.get_product(created.id).await.unwrap().unwrap(), updated);

  let mut row = purchase_row("Saffron", Decimal::new(1_2345, 4));
  row.total_amount = Decimal::new(1_2345, 4);
  store.insert_purchases(&[row]).await.unwrap();
  let stored = store.list_purchases().await.unwrap();
  assert_eq!(stored[0].price, Decimal::new(1_2345, 4));
  assert_eq!(stored[0].total_amount, Decimal::new(1_2345, 4));

  store.close().await;
}
