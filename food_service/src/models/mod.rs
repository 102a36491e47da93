// food_service/src/models/mod.rs

//! Record types persisted by the service and the JSON view they are served in.
//!
//! Field names on the wire and in the store are the deployed API's names
//! (`nombre`, `habilitado`, ...); the Rust fields use English names.

pub mod order;
pub mod product;
pub mod restaurant;
pub mod user;

pub use order::{Order, OrderInput, OrderLine, OrderLineInput, OrderQuery, OrderUpdate};
pub use product::{Product, ProductInput, ProductQuery};
pub use restaurant::{Restaurant, RestaurantInput, RestaurantQuery};
pub use user::{User, UserInput, UserLookup};

use bson::{oid::ObjectId, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::AppError;
use crate::store::StoreResult;

/// Name of the soft-delete flag carried by every record.
pub const ENABLED_FIELD: &str = "habilitado";

pub(crate) fn enabled_by_default() -> bool {
  true
}

/// Parses a client-supplied identifier, answering `message` as a 400 when it is malformed.
pub fn parse_id(raw: &str, message: &str) -> Result<ObjectId, AppError> {
  ObjectId::parse_str(raw).map_err(|_| AppError::Validation(message.to_string()))
}

/// Decodes a stored document into its record type.
pub fn decode<T: DeserializeOwned>(doc: Document) -> StoreResult<T> {
  Ok(bson::from_document(doc)?)
}

/// Encodes a record for storage.
pub fn encode<T: Serialize>(record: &T) -> StoreResult<Document> {
  Ok(bson::to_document(record)?)
}

/// Renders a record as response JSON: ObjectIds become hex strings and
/// datetimes RFC 3339 strings.
pub fn to_api_json<T: Serialize>(record: &T) -> Result<Value, AppError> {
  let bson = bson::to_bson(record).map_err(|e| AppError::Internal(format!("Failed to render record: {}", e)))?;
  Ok(bson_to_json(bson))
}

pub fn to_api_json_list<T: Serialize>(records: &[T]) -> Result<Value, AppError> {
  records.iter().map(to_api_json).collect::<Result<Vec<_>, _>>().map(Value::Array)
}

fn bson_to_json(value: Bson) -> Value {
  match value {
    Bson::ObjectId(id) => Value::String(id.to_hex()),
    Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
      Ok(text) => Value::String(text),
      Err(_) => Value::from(dt.timestamp_millis()),
    },
    Bson::Double(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
    Bson::Int32(v) => Value::from(v),
    Bson::Int64(v) => Value::from(v),
    Bson::String(s) => Value::String(s),
    Bson::Boolean(b) => Value::Bool(b),
    Bson::Null | Bson::Undefined => Value::Null,
    Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
    Bson::Document(doc) => Value::Object(
      doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect::<Map<String, Value>>(),
    ),
    other => other.into_relaxed_extjson(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bson::{doc, DateTime};
  use serde_json::json;

  #[test]
  fn object_ids_and_dates_render_as_strings() {
    let id = ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap();
    let rendered = bson_to_json(Bson::Document(doc! {
      "_id": id,
      "fechaPedido": DateTime::from_millis(0),
      "productos": [ { "productoId": id, "cantidad": 2 } ],
      "total": 12.5,
      "habilitado": true,
    }));

    assert_eq!(
      rendered,
      json!({
        "_id": "64b7f0c2a1b2c3d4e5f60718",
        "fechaPedido": "1970-01-01T00:00:00Z",
        "productos": [ { "productoId": "64b7f0c2a1b2c3d4e5f60718", "cantidad": 2 } ],
        "total": 12.5,
        "habilitado": true,
      })
    );
  }

  #[test]
  fn parse_id_rejects_malformed_input() {
    assert!(parse_id("64b7f0c2a1b2c3d4e5f60718", "bad").is_ok());
    for raw in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "64b7f0c2a1b2c3d4e5f6071"] {
      match parse_id(raw, "ID no válido") {
        Err(AppError::Validation(m)) => assert_eq!(m, "ID no válido"),
        other => panic!("expected validation error for {:?}, got {:?}", raw, other),
      }
    }
  }
}
