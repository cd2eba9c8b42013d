// grocery_api/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::{AppError, Result};

pub const PRODUCT_FIELDS_REQUIRED: &str = "All fields are required.";
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub description: String,
  pub image_url: String,
  pub category: String,
}

/// Request body for creating or replacing a product. Every field is optional
/// here so that a missing one surfaces as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
  pub name: Option<String>,
  pub price: Option<Decimal>,
  pub description: Option<String>,
  pub image_url: Option<String>,
  pub category: Option<String>,
}

/// A product that passed validation and has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub price: Decimal,
  pub description: String,
  pub image_url: String,
  pub category: String,
}

fn present(value: Option<String>) -> Option<String> {
  value.filter(|s| !s.is_empty())
}

impl ProductPayload {
  /// Empty strings and a zero price count as missing.
  pub fn validate(self) -> Result<NewProduct> {
    let missing = || AppError::Validation(PRODUCT_FIELDS_REQUIRED.to_string());

    Ok(NewProduct {
      name: present(self.name).ok_or_else(missing)?,
      price: self.price.filter(|p| !p.is_zero()).ok_or_else(missing)?,
      description: present(self.description).ok_or_else(missing)?,
      image_url: present(self.image_url).ok_or_else(missing)?,
      category: present(self.category).ok_or_else(missing)?,
    })
  }
}

impl NewProduct {
  pub fn with_id(self, id: i64) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      description: self.description,
      image_url: self.image_url,
      category: self.category,
    }
  }
}
