// food_service/src/store/mod.rs

//! Document store abstraction shared by every record kind.
//!
//! Services speak in BSON documents and a small filter vocabulary; the
//! backends decide how to execute them. `mongo` talks to a MongoDB server,
//! `memory` keeps everything in-process.

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use std::fmt;
use thiserror::Error;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// The four collections the service persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
  Users,
  Restaurants,
  Products,
  Orders,
}

impl CollectionName {
  pub fn as_str(self) -> &'static str {
    match self {
      CollectionName::Users => "usuarios",
      CollectionName::Restaurants => "restaurantes",
      CollectionName::Products => "productos",
      CollectionName::Orders => "pedidos",
    }
  }
}

impl fmt::Display for CollectionName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One predicate over a top-level document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
  Eq(String, Bson),
  /// Literal substring match, case-insensitive. Never interpreted as a pattern.
  ContainsIgnoreCase(String, String),
  /// Inclusive bounds; either side may be open.
  Range {
    field: String,
    gte: Option<Bson>,
    lte: Option<Bson>,
  },
  /// Field is absent or holds none of the listed values.
  NotIn(String, Vec<Bson>),
}

/// Conjunction of conditions. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
  conditions: Vec<Condition>,
}

impl Filter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn by_id(id: ObjectId) -> Self {
    Self::new().eq("_id", id)
  }

  #[must_use]
  pub fn eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
    self.conditions.push(Condition::Eq(field.to_string(), value.into()));
    self
  }

  #[must_use]
  pub fn contains_ignore_case(mut self, field: &str, text: &str) -> Self {
    self
      .conditions
      .push(Condition::ContainsIgnoreCase(field.to_string(), text.to_string()));
    self
  }

  #[must_use]
  pub fn range(mut self, field: &str, gte: Option<Bson>, lte: Option<Bson>) -> Self {
    if gte.is_some() || lte.is_some() {
      self.conditions.push(Condition::Range {
        field: field.to_string(),
        gte,
        lte,
      });
    }
    self
  }

  #[must_use]
  pub fn not_in(mut self, field: &str, values: Vec<Bson>) -> Self {
    self.conditions.push(Condition::NotIn(field.to_string(), values));
    self
  }

  pub fn conditions(&self) -> &[Condition] {
    &self.conditions
  }

  pub fn is_empty(&self) -> bool {
    self.conditions.is_empty()
  }
}

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("MongoDB error: {0}")]
  Mongo(#[from] mongodb::error::Error),

  #[error("Failed to encode document: {0}")]
  Encode(#[from] bson::ser::Error),

  #[error("Failed to decode document: {0}")]
  Decode(#[from] bson::de::Error),

  #[error("Store backend error: {0}")]
  Backend(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence seam used by the services.
///
/// Updates are single atomic operations: the filter is matched and the `$set`
/// applied in one step, and the post-update document is returned. `None`
/// means the filter matched nothing.
#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Inserts `doc`, assigning a fresh `_id` when it has none. Returns the id.
  async fn insert(&self, collection: CollectionName, doc: Document) -> StoreResult<ObjectId>;

  async fn find_one(&self, collection: CollectionName, filter: &Filter) -> StoreResult<Option<Document>>;

  /// All matching documents in insertion order.
  async fn find(&self, collection: CollectionName, filter: &Filter) -> StoreResult<Vec<Document>>;

  async fn update_one(
    &self,
    collection: CollectionName,
    filter: &Filter,
    set: Document,
  ) -> StoreResult<Option<Document>>;

  async fn find_by_id(&self, collection: CollectionName, id: ObjectId) -> StoreResult<Option<Document>> {
    self.find_one(collection, &Filter::by_id(id)).await
  }

  /// Liveness probe used at startup.
  async fn ping(&self) -> StoreResult<()>;
}
