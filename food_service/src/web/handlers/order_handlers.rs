// food_service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{to_api_json, to_api_json_list, OrderInput, OrderQuery, OrderUpdate};
use crate::services::order_service;
use crate::state::AppState;

#[instrument(name = "handler::create_order", skip(app_state, payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<OrderInput>,
) -> Result<HttpResponse, AppError> {
  let order = order_service::create_order(app_state.store.as_ref(), payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(json!({
      "mensaje": "Pedido creado exitosamente",
      "_id": order.id.to_hex(),
  })))
}

/// Unlike the restaurant and product searches, an empty result is a 200 with `[]`.
#[instrument(name = "handler::filter_orders", skip(app_state, query))]
pub async fn filter_orders_handler(
  app_state: web::Data<AppState>,
  query: web::Query<OrderQuery>,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::filter_orders(app_state.store.as_ref(), query.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json_list(&orders)?))
}

#[instrument(name = "handler::list_sent_orders", skip(app_state))]
pub async fn list_sent_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_sent_orders(app_state.store.as_ref()).await?;
  info!("{} orders waiting for acceptance.", orders.len());
  Ok(HttpResponse::Ok().json(to_api_json_list(&orders)?))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order = order_service::get_order(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json(&order)?))
}

#[instrument(name = "handler::update_order", skip(app_state, path, payload), fields(order_id = %path.as_ref()))]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<OrderUpdate>,
) -> Result<HttpResponse, AppError> {
  order_service::update_order(app_state.store.as_ref(), &path.into_inner(), payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "mensaje": "Pedido modificado exitosamente" })))
}

#[instrument(name = "handler::disable_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn disable_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  order_service::disable_order(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "mensaje": "Pedido inhabilitado exitosamente" })))
}
