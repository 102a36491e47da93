// food_service/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use super::extractors::{json_config, path_config, query_config};
use super::handlers::{order_handlers, product_handlers, restaurant_handlers, user_handlers};
use crate::config::StoreBackend;
use crate::errors::AppError;
use crate::state::AppState;

/// Reports whether the store answers.
async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state
    .store
    .ping()
    .await
    .map_err(AppError::store("Base de datos no disponible"))?;
  let store = match app_state.config.store_backend {
    StoreBackend::MongoDb => "mongodb",
    StoreBackend::Memory => "memory",
  };
  Ok(HttpResponse::Ok().json(json!({ "status": "ok", "store": store })))
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .app_data(path_config())
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/usuarios")
        .route("", web::post().to(user_handlers::create_user_handler))
        .route("", web::get().to(user_handlers::lookup_user_handler))
        .route("/{id}", web::put().to(user_handlers::update_user_handler))
        .route("/{id}/deshabilitar", web::patch().to(user_handlers::disable_user_handler)),
    )
    .service(
      // Fixed segments are registered ahead of `/{id}` so they are not captured as ids.
      web::scope("/restaurantes")
        .route("", web::post().to(restaurant_handlers::create_restaurant_handler))
        .route("/busqueda", web::get().to(restaurant_handlers::search_restaurants_handler))
        .route("/{id}", web::get().to(restaurant_handlers::get_restaurant_handler))
        .route("/{id}", web::put().to(restaurant_handlers::update_restaurant_handler))
        .route(
          "/{id}/deshabilitar",
          web::patch().to(restaurant_handlers::disable_restaurant_handler),
        ),
    )
    .service(
      web::scope("/productos")
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/busqueda", web::get().to(product_handlers::search_products_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::put().to(product_handlers::update_product_handler))
        .route("/{id}/inhabilitar", web::patch().to(product_handlers::disable_product_handler)),
    )
    .service(
      web::scope("/pedidos")
        .route("", web::post().to(order_handlers::create_order_handler))
        .route("/filtrados", web::get().to(order_handlers::filter_orders_handler))
        .route("/enviados-sin-aceptar", web::get().to(order_handlers::list_sent_orders_handler))
        .route("/inhabilitar/{id}", web::put().to(order_handlers::disable_order_handler))
        .route("/{id}", web::get().to(order_handlers::get_order_handler))
        .route("/{id}", web::put().to(order_handlers::update_order_handler)),
    );
}
