// food_service/src/models/restaurant.rs

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::enabled_by_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(rename = "popularidad", default, skip_serializing_if = "Option::is_none")]
  pub popularity: Option<f64>,
  #[serde(rename = "habilitado", default = "enabled_by_default")]
  pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantInput {
  #[serde(rename = "nombre")]
  pub name: Option<String>,
  #[serde(rename = "categoria")]
  pub category: Option<String>,
  #[serde(rename = "popularidad")]
  pub popularity: Option<f64>,
}

/// Search filters; `name` matches as a case-insensitive substring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantQuery {
  #[serde(rename = "categoria")]
  pub category: Option<String>,
  #[serde(rename = "nombre")]
  pub name: Option<String>,
}
