// grocery_api/src/lib.rs

//! REST API over the `products` and `purchases` tables of a grocery store.
//!
//! Each route maps onto exactly one statement against the relational store,
//! reached through the [`db::Store`] trait held in [`state::AppState`].

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
