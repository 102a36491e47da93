// food_service/src/web/handlers/restaurant_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::{to_api_json, to_api_json_list, RestaurantInput, RestaurantQuery};
use crate::services::restaurant_service;
use crate::state::AppState;

#[instrument(name = "handler::create_restaurant", skip(app_state, payload))]
pub async fn create_restaurant_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RestaurantInput>,
) -> Result<HttpResponse, AppError> {
  let restaurant = restaurant_service::create_restaurant(app_state.store.as_ref(), payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(json!({
      "mensaje": "Restaurante creado con éxito",
      "_id": restaurant.id.to_hex(),
  })))
}

#[instrument(name = "handler::search_restaurants", skip(app_state, query))]
pub async fn search_restaurants_handler(
  app_state: web::Data<AppState>,
  query: web::Query<RestaurantQuery>,
) -> Result<HttpResponse, AppError> {
  let restaurants = restaurant_service::search_restaurants(app_state.store.as_ref(), query.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json_list(&restaurants)?))
}

#[instrument(name = "handler::get_restaurant", skip(app_state, path), fields(restaurant_id = %path.as_ref()))]
pub async fn get_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let restaurant = restaurant_service::get_restaurant(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json(&restaurant)?))
}

#[instrument(name = "handler::update_restaurant", skip(app_state, path, payload), fields(restaurant_id = %path.as_ref()))]
pub async fn update_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<RestaurantInput>,
) -> Result<HttpResponse, AppError> {
  let restaurant =
    restaurant_service::update_restaurant(app_state.store.as_ref(), &path.into_inner(), payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json(&restaurant)?))
}

#[instrument(name = "handler::disable_restaurant", skip(app_state, path), fields(restaurant_id = %path.as_ref()))]
pub async fn disable_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  restaurant_service::disable_restaurant(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Restaurante deshabilitado con éxito" })))
}
