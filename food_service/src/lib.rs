// food_service/src/lib.rs

//! REST backend for a food-delivery application: users, restaurants,
//! products and orders over a document store, with soft deletes.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend};
use crate::store::{DocumentStore, MemoryStore, MongoStore, StoreResult};

/// Opens the store selected by `config`, checking that it answers before returning.
pub async fn connect_store(config: &AppConfig) -> StoreResult<Arc<dyn DocumentStore>> {
  let store: Arc<dyn DocumentStore> = match config.store_backend {
    StoreBackend::MongoDb => Arc::new(MongoStore::connect(&config.mongodb_uri, &config.database_name).await?),
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory store; data is lost on shutdown.");
      Arc::new(MemoryStore::new())
    }
  };
  store.ping().await?;
  Ok(store)
}
