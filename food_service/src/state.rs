// food_service/src/state.rs
use crate::config::AppConfig;
use crate::store::DocumentStore;
use std::sync::Arc;

/// Built once at startup and handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn DocumentStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn DocumentStore>, config: AppConfig) -> Self {
    Self {
      store,
      config: Arc::new(config),
    }
  }
}
