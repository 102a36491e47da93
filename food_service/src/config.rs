// food_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// Which `DocumentStore` implementation backs the running service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  MongoDb,
  Memory,
}

impl FromStr for StoreBackend {
  type Err = AppError;

  fn from_str(value: &str) -> Result<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
      "memory" => Ok(StoreBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORE_BACKEND '{}': expected 'mongodb' or 'memory'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  pub mongodb_uri: String,
  pub database_name: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from any variable source; `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "3000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let store_backend = get_or("STORE_BACKEND", "mongodb").parse::<StoreBackend>()?;
    let mongodb_uri = get_or("MONGODB_URI", "mongodb://localhost:27017");
    let database_name = get_or("DATABASE_NAME", "database_proyecto1");

    tracing::info!(?store_backend, "Application configuration loaded successfully.");
    // The URI may embed credentials, so it is never logged.

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      mongodb_uri,
      database_name,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
    assert_eq!(config.store_backend, StoreBackend::MongoDb);
    assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
    assert_eq!(config.database_name, "database_proyecto1");
  }

  #[test]
  fn overrides_are_honoured() {
    let config = config_from(&[
      ("SERVER_HOST", "0.0.0.0"),
      ("SERVER_PORT", "8081"),
      ("STORE_BACKEND", "Memory"),
      ("DATABASE_NAME", "pedidos_test"),
    ])
    .unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:8081");
    assert_eq!(config.store_backend, StoreBackend::Memory);
    assert_eq!(config.database_name, "pedidos_test");
  }

  #[test]
  fn invalid_values_are_config_errors() {
    assert!(matches!(config_from(&[("SERVER_PORT", "http")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("STORE_BACKEND", "postgres")]), Err(AppError::Config(_))));
  }
}
