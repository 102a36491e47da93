// food_service/src/models/user.rs

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::enabled_by_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "correoElectronico")]
  pub email: String,
  // Stored as given; credential hashing is not part of this service.
  #[serde(rename = "contraseña")]
  pub password: String,
  #[serde(rename = "numeroCelular", default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
  #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
  pub role: Option<String>,
  #[serde(rename = "habilitado", default = "enabled_by_default")]
  pub enabled: bool,
}

/// Body of the create and update routes. Every field is optional here so
/// that missing ones surface as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
  #[serde(rename = "nombre")]
  pub name: Option<String>,
  #[serde(rename = "correoElectronico")]
  pub email: Option<String>,
  #[serde(rename = "contraseña")]
  pub password: Option<String>,
  #[serde(rename = "numeroCelular")]
  pub phone: Option<String>,
  #[serde(rename = "direccion")]
  pub address: Option<String>,
  #[serde(rename = "rol")]
  pub role: Option<String>,
}

/// Query string of `GET /usuarios`: either an id or an email/password pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLookup {
  #[serde(alias = "_id")]
  pub id: Option<String>,
  #[serde(rename = "correoElectronico")]
  pub email: Option<String>,
  #[serde(rename = "contraseña")]
  pub password: Option<String>,
}
