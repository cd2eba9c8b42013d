// grocery_api/src/models/mod.rs

//! Contains data structures representing database entities and the request
//! payloads that create them.

pub mod product;
pub mod purchase;

pub use product::{NewProduct, Product, ProductPayload};
pub use purchase::{CartItem, NewPurchase, Purchase, PurchasePayload};
