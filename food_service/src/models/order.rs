// food_service/src/models/order.rs

use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::enabled_by_default;

/// Status of an order that has been sent to the restaurant.
pub const STATUS_SENT: &str = "enviado";
/// Status of an order that has been completed.
pub const STATUS_PLACED: &str = "realizado";

/// Statuses that freeze an order's content against the update route.
pub const FROZEN_STATUSES: [&str; 2] = [STATUS_SENT, STATUS_PLACED];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  #[serde(rename = "productoId")]
  pub product_id: ObjectId,
  #[serde(rename = "cantidad", default, skip_serializing_if = "Option::is_none")]
  pub quantity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  #[serde(rename = "usuarioId", default, skip_serializing_if = "Option::is_none")]
  pub user_id: Option<ObjectId>,
  #[serde(rename = "restauranteId", default, skip_serializing_if = "Option::is_none")]
  pub restaurant_id: Option<ObjectId>,
  #[serde(rename = "productos", default)]
  pub lines: Vec<OrderLine>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total: Option<f64>,
  #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  #[serde(rename = "enviadoPor", default, skip_serializing_if = "Option::is_none")]
  pub sent_by: Option<String>,
  #[serde(rename = "fechaPedido")]
  pub placed_at: DateTime,
  #[serde(rename = "habilitado", default = "enabled_by_default")]
  pub enabled: bool,
}

impl Order {
  /// A frozen order keeps its lines, total and status; it can still be disabled.
  pub fn is_frozen(&self) -> bool {
    self
      .status
      .as_deref()
      .is_some_and(|status| FROZEN_STATUSES.contains(&status))
  }
}

/// One `{productoId, cantidad}` entry as sent by clients. `cantidad` is any
/// JSON number and may be left out.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineInput {
  #[serde(rename = "productoId")]
  pub product_id: String,
  #[serde(rename = "cantidad")]
  pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderInput {
  #[serde(rename = "usuarioId")]
  pub user_id: Option<String>,
  #[serde(rename = "restauranteId")]
  pub restaurant_id: Option<String>,
  #[serde(rename = "productos", default)]
  pub lines: Vec<OrderLineInput>,
  pub total: Option<f64>,
  #[serde(rename = "estado")]
  pub status: Option<String>,
  #[serde(rename = "enviadoPor")]
  pub sent_by: Option<String>,
}

/// Body of `PUT /pedidos/{id}`. All three fields are overwritten, absent ones included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
  #[serde(rename = "productos", default)]
  pub lines: Vec<OrderLineInput>,
  pub total: Option<f64>,
  #[serde(rename = "estado")]
  pub status: Option<String>,
}

/// Filters of `GET /pedidos/filtrados`. Date bounds accept RFC 3339 or `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
  #[serde(rename = "usuarioId")]
  pub user_id: Option<String>,
  #[serde(rename = "restauranteId")]
  pub restaurant_id: Option<String>,
  #[serde(rename = "enviadoPor")]
  pub sent_by: Option<String>,
  #[serde(rename = "fechaInicio")]
  pub from: Option<String>,
  #[serde(rename = "fechaFin")]
  pub to: Option<String>,
}
