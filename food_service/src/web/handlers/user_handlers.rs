// food_service/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{to_api_json, UserInput, UserLookup};
use crate::services::user_service;
use crate::state::AppState;

#[instrument(name = "handler::create_user", skip(app_state, payload))]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
  let user = user_service::create_user(app_state.store.as_ref(), payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(json!({
      "mensaje": "Usuario creado con éxito",
      "_id": user.id.to_hex(),
  })))
}

/// `GET /usuarios?id=...` or `GET /usuarios?correoElectronico=...&contraseña=...`
#[instrument(name = "handler::lookup_user", skip(app_state, query))]
pub async fn lookup_user_handler(
  app_state: web::Data<AppState>,
  query: web::Query<UserLookup>,
) -> Result<HttpResponse, AppError> {
  let user = user_service::lookup_user(app_state.store.as_ref(), query.into_inner()).await?;
  info!(user_id = %user.id, "User found.");
  Ok(HttpResponse::Ok().json(to_api_json(&user)?))
}

#[instrument(name = "handler::update_user", skip(app_state, path, payload), fields(user_id = %path.as_ref()))]
pub async fn update_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
  let user = user_service::update_user(app_state.store.as_ref(), &path.into_inner(), payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(to_api_json(&user)?))
}

#[instrument(name = "handler::disable_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn disable_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  user_service::disable_user(app_state.store.as_ref(), &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Usuario deshabilitado con éxito" })))
}
