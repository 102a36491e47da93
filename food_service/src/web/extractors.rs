// food_service/src/web/extractors.rs

//! Extractor configuration: rejected bodies, query strings and paths answer
//! with the same JSON error shape as every other client error.

use actix_web::{error, web, HttpRequest};
use tracing::debug;

use crate::errors::AppError;

fn rejected(kind: &str, err: impl std::fmt::Display, req: &HttpRequest) -> error::Error {
  debug!(path = %req.path(), %err, "Rejected {}.", kind);
  AppError::Validation(format!("{} no válido: {}", kind, err)).into()
}

pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, req| rejected("Cuerpo de la solicitud", err, req))
}

pub fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, req| rejected("Parámetro de consulta", err, req))
}

pub fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err, req| rejected("Parámetro de ruta", err, req))
}
