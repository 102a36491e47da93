// food_service/src/services/mod.rs

//! Business rules for each record kind. Handlers translate HTTP in and out;
//! validation, existence checks and the frozen-order rule live here.

pub mod order_service;
pub mod product_service;
pub mod restaurant_service;
pub mod user_service;

use bson::{oid::ObjectId, Bson, Document};
use serde::de::DeserializeOwned;

use crate::errors::{AppError, Result};
use crate::models::{decode, ENABLED_FIELD};
use crate::store::{CollectionName, DocumentStore, Filter};

/// Client-facing messages of one record kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Messages {
  pub not_found: &'static str,
  pub invalid_id: &'static str,
}

/// Loads one record by id, turning absence into a 404.
pub(crate) async fn fetch<T: DeserializeOwned>(
  store: &dyn DocumentStore,
  collection: CollectionName,
  id: ObjectId,
  messages: Messages,
  context: &'static str,
) -> Result<T> {
  let doc = store
    .find_by_id(collection, id)
    .await
    .map_err(AppError::store(context))?
    .ok_or_else(|| AppError::NotFound(messages.not_found.to_string()))?;
  decode(doc).map_err(AppError::store(context))
}

/// Atomically applies `set` to the record matching `filter` and returns its new state.
/// `Ok(None)` means nothing matched.
pub(crate) async fn apply<T: DeserializeOwned>(
  store: &dyn DocumentStore,
  collection: CollectionName,
  filter: &Filter,
  set: Document,
  context: &'static str,
) -> Result<Option<T>> {
  let updated = store
    .update_one(collection, filter, set)
    .await
    .map_err(AppError::store(context))?;
  updated.map(decode).transpose().map_err(AppError::store(context))
}

/// Overwrites fields of the record with `id`; 404 when it does not exist.
pub(crate) async fn update_by_id<T: DeserializeOwned>(
  store: &dyn DocumentStore,
  collection: CollectionName,
  id: ObjectId,
  set: Document,
  messages: Messages,
  context: &'static str,
) -> Result<T> {
  apply(store, collection, &Filter::by_id(id), set, context)
    .await?
    .ok_or_else(|| AppError::NotFound(messages.not_found.to_string()))
}

/// Soft-deletes the record with `id`. Disabled records stay readable.
pub(crate) async fn disable<T: DeserializeOwned>(
  store: &dyn DocumentStore,
  collection: CollectionName,
  id: ObjectId,
  messages: Messages,
  context: &'static str,
) -> Result<T> {
  let mut set = Document::new();
  set.insert(ENABLED_FIELD, false);
  update_by_id(store, collection, id, set, messages, context).await
}

pub(crate) fn decode_all<T: DeserializeOwned>(docs: Vec<Document>, context: &'static str) -> Result<Vec<T>> {
  docs
    .into_iter()
    .map(decode)
    .collect::<std::result::Result<Vec<T>, _>>()
    .map_err(AppError::store(context))
}

/// `None` is written as an explicit null so full replacements clear the field.
pub(crate) fn nullable<T: Into<Bson>>(value: Option<T>) -> Bson {
  value.map_or(Bson::Null, Into::into)
}

/// Treats blank values (`?categoria=`, `"nombre": "  "`) as absent. Anything
/// else is returned exactly as given, surrounding whitespace included.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}
