// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use bson::oid::ObjectId;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::Level;

use food_service::config::AppConfig;
use food_service::models::{ProductInput, RestaurantInput};
use food_service::services::{product_service, restaurant_service};
use food_service::state::AppState;
use food_service::store::MemoryStore;

/// An identifier the store can never have produced.
pub const MALFORMED_ID: &str = "no-es-un-id";

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn test_config() -> AppConfig {
  AppConfig::from_lookup(|name| match name {
    "STORE_BACKEND" => Some("memory".to_string()),
    _ => None,
  })
  .expect("memory configuration is valid")
}

/// Application state over a fresh in-memory store. The store handle is
/// returned too so tests can inspect what was persisted.
pub fn test_state() -> (AppState, Arc<MemoryStore>) {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  let state = AppState::new(store.clone(), test_config());
  (state, store)
}

/// A well-formed id that matches no record.
pub fn absent_id() -> String {
  ObjectId::new().to_hex()
}

pub async fn seed_restaurant(store: &MemoryStore, name: &str, category: &str) -> ObjectId {
  let input = RestaurantInput {
    name: Some(name.to_string()),
    category: Some(category.to_string()),
    popularity: Some(4.5),
  };
  restaurant_service::create_restaurant(store, input)
    .await
    .expect("restaurant seeded")
    .id
}

pub async fn seed_product(store: &MemoryStore, restaurant_id: ObjectId, name: &str, category: &str) -> ObjectId {
  let input = ProductInput {
    name: Some(name.to_string()),
    description: Some(format!("{} de la casa", name)),
    price: Some(10.0),
    category: Some(category.to_string()),
    restaurant_id: Some(restaurant_id.to_hex()),
  };
  product_service::create_product(store, input)
    .await
    .expect("product seeded")
    .id
}

/// Builds the full application over `$state` and returns the initialized test service.
macro_rules! spawn_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state.clone()))
        .configure(food_service::web::configure_app_routes),
    )
    .await
  };
}
