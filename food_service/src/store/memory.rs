// food_service/src/store/memory.rs

//! In-process document store. Used for local runs without a database server
//! and by the test suite.

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::{CollectionName, Condition, DocumentStore, Filter, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
  collections: RwLock<HashMap<CollectionName, Vec<Document>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of documents held in `collection`, disabled ones included.
  pub fn len(&self, collection: CollectionName) -> usize {
    self.collections.read().get(&collection).map_or(0, Vec::len)
  }

  pub fn is_empty(&self, collection: CollectionName) -> bool {
    self.len(collection) == 0
  }
}

#[async_trait]
impl DocumentStore for MemoryStore {
  #[instrument(name = "memory_store::insert", skip(self, doc))]
  async fn insert(&self, collection: CollectionName, doc: Document) -> StoreResult<ObjectId> {
    let id = match doc.get("_id") {
      Some(Bson::ObjectId(existing)) => *existing,
      _ => ObjectId::new(),
    };

    // Keep `_id` as the leading key, the way the server lays documents out.
    let mut stored = Document::new();
    stored.insert("_id", id);
    for (key, value) in doc {
      if key != "_id" {
        stored.insert(key, value);
      }
    }

    self.collections.write().entry(collection).or_default().push(stored);
    debug!(%id, "Document inserted.");
    Ok(id)
  }

  async fn find_one(&self, collection: CollectionName, filter: &Filter) -> StoreResult<Option<Document>> {
    let guard = self.collections.read();
    Ok(
      guard
        .get(&collection)
        .and_then(|docs| docs.iter().find(|doc| matches(doc, filter)))
        .cloned(),
    )
  }

  async fn find(&self, collection: CollectionName, filter: &Filter) -> StoreResult<Vec<Document>> {
    let guard = self.collections.read();
    Ok(
      guard
        .get(&collection)
        .map(|docs| docs.iter().filter(|doc| matches(doc, filter)).cloned().collect())
        .unwrap_or_default(),
    )
  }

  #[instrument(name = "memory_store::update_one", skip(self, filter, set))]
  async fn update_one(
    &self,
    collection: CollectionName,
    filter: &Filter,
    set: Document,
  ) -> StoreResult<Option<Document>> {
    // The write lock spans match and mutation, so the update is atomic.
    let mut guard = self.collections.write();
    let Some(doc) = guard
      .get_mut(&collection)
      .and_then(|docs| docs.iter_mut().find(|doc| matches(doc, filter)))
    else {
      return Ok(None);
    };

    for (key, value) in set {
      doc.insert(key, value);
    }
    Ok(Some(doc.clone()))
  }

  async fn ping(&self) -> StoreResult<()> {
    Ok(())
  }
}

fn matches(doc: &Document, filter: &Filter) -> bool {
  filter.conditions().iter().all(|condition| satisfies(doc, condition))
}

fn satisfies(doc: &Document, condition: &Condition) -> bool {
  match condition {
    Condition::Eq(field, expected) => doc.get(field) == Some(expected),
    Condition::ContainsIgnoreCase(field, text) => doc
      .get_str(field)
      .map(|value| value.to_lowercase().contains(&text.to_lowercase()))
      .unwrap_or(false),
    Condition::Range { field, gte, lte } => {
      let Some(value) = doc.get(field) else {
        return false;
      };
      let above = gte
        .as_ref()
        .map_or(true, |bound| matches!(compare(value, bound), Some(Ordering::Greater | Ordering::Equal)));
      let below = lte
        .as_ref()
        .map_or(true, |bound| matches!(compare(value, bound), Some(Ordering::Less | Ordering::Equal)));
      above && below
    }
    Condition::NotIn(field, values) => doc.get(field).map_or(true, |value| !values.contains(value)),
  }
}

/// Orders values of the same BSON family. Mixed families never compare.
fn compare(a: &Bson, b: &Bson) -> Option<Ordering> {
  match (a, b) {
    (Bson::DateTime(x), Bson::DateTime(y)) => Some(x.cmp(y)),
    (Bson::String(x), Bson::String(y)) => Some(x.cmp(y)),
    _ => match (as_f64(a), as_f64(b)) {
      (Some(x), Some(y)) => x.partial_cmp(&y),
      _ => None,
    },
  }
}

fn as_f64(value: &Bson) -> Option<f64> {
  match value {
    Bson::Double(v) => Some(*v),
    Bson::Int32(v) => Some(f64::from(*v)),
    Bson::Int64(v) => Some(*v as f64),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bson::{doc, DateTime};

  #[tokio::test]
  async fn insert_assigns_ids_and_keeps_order() {
    let store = MemoryStore::new();
    let first = store
      .insert(CollectionName::Restaurants, doc! { "nombre": "Uno" })
      .await
      .unwrap();
    let second = store
      .insert(CollectionName::Restaurants, doc! { "nombre": "Dos" })
      .await
      .unwrap();
    assert_ne!(first, second);

    let all = store.find(CollectionName::Restaurants, &Filter::new()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|d| d.get_str("nombre").unwrap()).collect();
    assert_eq!(names, vec!["Uno", "Dos"]);
    assert_eq!(all[0].keys().next().map(String::as_str), Some("_id"));
    assert!(store.is_empty(CollectionName::Orders));
  }

  #[tokio::test]
  async fn contains_is_literal_and_case_insensitive() {
    let store = MemoryStore::new();
    store
      .insert(CollectionName::Restaurants, doc! { "nombre": "La Pizzeria (Centro)" })
      .await
      .unwrap();

    let hit = Filter::new().contains_ignore_case("nombre", "PIZZ");
    assert_eq!(store.find(CollectionName::Restaurants, &hit).await.unwrap().len(), 1);

    let pattern_like = Filter::new().contains_ignore_case("nombre", "(centro)");
    assert_eq!(store.find(CollectionName::Restaurants, &pattern_like).await.unwrap().len(), 1);

    let wildcard = Filter::new().contains_ignore_case("nombre", ".*");
    assert!(store.find(CollectionName::Restaurants, &wildcard).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn range_bounds_are_inclusive() {
    let store = MemoryStore::new();
    for millis in [1_000, 2_000, 3_000] {
      store
        .insert(CollectionName::Orders, doc! { "fechaPedido": DateTime::from_millis(millis) })
        .await
        .unwrap();
    }

    let filter = Filter::new().range(
      "fechaPedido",
      Some(DateTime::from_millis(2_000).into()),
      Some(DateTime::from_millis(3_000).into()),
    );
    assert_eq!(store.find(CollectionName::Orders, &filter).await.unwrap().len(), 2);

    let open_ended = Filter::new().range("fechaPedido", None, Some(DateTime::from_millis(1_000).into()));
    assert_eq!(store.find(CollectionName::Orders, &open_ended).await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn update_one_respects_not_in_guard() {
    let store = MemoryStore::new();
    let id = store
      .insert(CollectionName::Orders, doc! { "estado": "enviado", "total": 10.0 })
      .await
      .unwrap();

    let guarded = Filter::by_id(id).not_in("estado", vec!["enviado".into(), "realizado".into()]);
    let outcome = store
      .update_one(CollectionName::Orders, &guarded, doc! { "total": 99.0 })
      .await
      .unwrap();
    assert!(outcome.is_none());

    let unchanged = store.find_by_id(CollectionName::Orders, id).await.unwrap().unwrap();
    assert_eq!(unchanged.get_f64("total").unwrap(), 10.0);

    let updated = store
      .update_one(CollectionName::Orders, &Filter::by_id(id), doc! { "habilitado": false })
      .await
      .unwrap()
      .unwrap();
    assert_eq!(updated.get_bool("habilitado").unwrap(), false);
    assert_eq!(store.len(CollectionName::Orders), 1);
  }
}
