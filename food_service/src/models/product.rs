// food_service/src/models/product.rs

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::enabled_by_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(rename = "restauranteId")]
  pub restaurant_id: ObjectId,
  #[serde(rename = "habilitado", default = "enabled_by_default")]
  pub enabled: bool,
}

/// Body of the create and update routes. Creation requires most fields;
/// an update writes only the ones present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
  #[serde(rename = "nombre")]
  pub name: Option<String>,
  #[serde(rename = "descripcion")]
  pub description: Option<String>,
  #[serde(rename = "precio")]
  pub price: Option<f64>,
  #[serde(rename = "categoria")]
  pub category: Option<String>,
  #[serde(rename = "restauranteId")]
  pub restaurant_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
  #[serde(rename = "restauranteId")]
  pub restaurant_id: Option<String>,
  #[serde(rename = "categoria")]
  pub category: Option<String>,
}
