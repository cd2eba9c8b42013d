// grocery_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_vars(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_vars<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let server_port = get_env("PORT")
      .unwrap_or_else(|_| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
