// food_service/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::{to_api_json, to_api_json_list, ProductInput, ProductQuery};
use crate::services::product_service;
use crate::state::AppState;

/// Answers 200 with the new product's id.
#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let product = product_service::create_product(app_state.store.as_ref(), payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Producto creado con éxito",
      "_id": product.id.to_hex(),
  })))
}

#[instrument(name = "handler::search_products", skip(app_state, query))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductQuery>,
) -> Result<HttpResponse, AppError> {
  let products = product_service::search_products(app_state.store.as_ref(), query.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json_list(&products)?))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product = product_service::get_product(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json(&product)?))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let product = product_service::update_product(app_state.store.as_ref(), &path.into_inner(), payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Producto actualizado con éxito",
      "producto": to_api_json(&product)?,
  })))
}

#[instrument(name = "handler::disable_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn disable_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product = product_service::disable_product(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Producto inhabilitado con éxito",
      "producto": to_api_json(&product)?,
  })))
}
