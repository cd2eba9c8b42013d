// grocery_api/src/services/mod.rs

pub mod purchase_service;
