// food_service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use food_service::config::AppConfig;
use food_service::state::AppState;
use food_service::web::configure_app_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting food service...");

  let app_config = AppConfig::from_env().context("failed to load application configuration")?;

  // One connection for the life of the process; the driver pools underneath.
  let store = food_service::connect_store(&app_config)
    .await
    .context("failed to connect to the document store")?;
  tracing::info!(backend = ?app_config.store_backend, "Document store is reachable.");

  let server_address = app_config.bind_address();
  let app_state = AppState::new(store, app_config);

  tracing::info!("Attempting to bind server to {}...", server_address);
  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
