// grocery_api/src/models/purchase.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted purchase line. Every row of a submission repeats the same
/// `total_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
  pub id: i64,
  pub user_name: String,
  pub product_name: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub phone: String,
  pub location: String,
  pub payment_method: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub total_amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
  pub name: String,
  pub price: Decimal,
  // Any number; absent or zero means one unit
  pub quantity: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePayload {
  pub user_name: Option<String>,
  pub phone: Option<String>,
  pub location: Option<String>,
  pub payment_method: Option<String>,
  pub cart: Option<Vec<CartItem>>,
}

/// A purchase row ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchase {
  pub user_name: String,
  pub product_name: String,
  pub price: Decimal,
  pub phone: String,
  pub location: String,
  pub payment_method: String,
  pub total_amount: Decimal,
}

impl NewPurchase {
  pub fn with_id(self, id: i64) -> Purchase {
    Purchase {
      id,
      user_name: self.user_name,
      product_name: self.product_name,
      price: self.price,
      phone: self.phone,
      location: self.location,
      payment_method: self.payment_method,
      total_amount: self.total_amount,
    }
  }
}
