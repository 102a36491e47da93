// food_service/src/store/mongo.rs

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{
  options::{ClientOptions, FindOneAndUpdateOptions, FindOptions, ReturnDocument},
  Client, Collection, Database,
};
use tracing::{debug, error, info, instrument};

use super::{CollectionName, Condition, DocumentStore, Filter, StoreError, StoreResult};

/// MongoDB-backed store. The driver owns the connection pool; this struct is cheap to share.
#[derive(Clone, Debug)]
pub struct MongoStore {
  db: Database,
}

impl MongoStore {
  #[instrument(name = "mongo_store::connect", skip(uri))]
  pub async fn connect(uri: &str, database_name: &str) -> StoreResult<Self> {
    let mut options = ClientOptions::parse(uri).await.map_err(|e| {
      error!("Invalid MongoDB connection string: {}", e);
      StoreError::Mongo(e)
    })?;
    options.app_name = Some("food_service".to_string());

    let client = Client::with_options(options)?;
    info!("MongoDB client created for database '{}'.", database_name);
    Ok(Self {
      db: client.database(database_name),
    })
  }

  fn collection(&self, name: CollectionName) -> Collection<Document> {
    self.db.collection::<Document>(name.as_str())
  }
}

#[async_trait]
impl DocumentStore for MongoStore {
  #[instrument(name = "mongo_store::insert", skip(self, doc))]
  async fn insert(&self, collection: CollectionName, doc: Document) -> StoreResult<ObjectId> {
    let result = self.collection(collection).insert_one(doc, None).await?;
    result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| StoreError::Backend(format!("insert into '{}' returned a non-ObjectId key", collection)))
  }

  #[instrument(name = "mongo_store::find_one", skip(self, filter))]
  async fn find_one(&self, collection: CollectionName, filter: &Filter) -> StoreResult<Option<Document>> {
    let query = to_query(filter);
    debug!(?query, "Running find_one.");
    Ok(self.collection(collection).find_one(query, None).await?)
  }

  #[instrument(name = "mongo_store::find", skip(self, filter))]
  async fn find(&self, collection: CollectionName, filter: &Filter) -> StoreResult<Vec<Document>> {
    let query = to_query(filter);
    debug!(?query, "Running find.");
    // ObjectIds lead with their creation second, so this approximates insertion order.
    let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
    let cursor = self.collection(collection).find(query, options).await?;
    let docs: Vec<Document> = cursor.try_collect().await?;
    Ok(docs)
  }

  #[instrument(name = "mongo_store::update_one", skip(self, filter, set))]
  async fn update_one(
    &self,
    collection: CollectionName,
    filter: &Filter,
    set: Document,
  ) -> StoreResult<Option<Document>> {
    let query = to_query(filter);
    debug!(?query, ?set, "Running find_one_and_update.");
    let options = FindOneAndUpdateOptions::builder()
      .return_document(ReturnDocument::After)
      .build();
    Ok(
      self
        .collection(collection)
        .find_one_and_update(query, doc! { "$set": set }, options)
        .await?,
    )
  }

  async fn ping(&self) -> StoreResult<()> {
    self.db.run_command(doc! { "ping": 1 }, None).await?;
    Ok(())
  }
}

/// Translates a `Filter` into a MongoDB query document.
pub(crate) fn to_query(filter: &Filter) -> Document {
  let mut clauses: Vec<Document> = filter.conditions().iter().map(to_clause).collect();
  match clauses.len() {
    0 => Document::new(),
    1 => clauses.remove(0),
    _ => doc! { "$and": clauses },
  }
}

fn to_clause(condition: &Condition) -> Document {
  let (field, predicate): (&str, Bson) = match condition {
    Condition::Eq(field, value) => (field.as_str(), value.clone()),
    Condition::ContainsIgnoreCase(field, text) => (
      field.as_str(),
      Bson::Document(doc! { "$regex": regex::escape(text), "$options": "i" }),
    ),
    Condition::Range { field, gte, lte } => {
      let mut bounds = Document::new();
      if let Some(gte) = gte {
        bounds.insert("$gte", gte.clone());
      }
      if let Some(lte) = lte {
        bounds.insert("$lte", lte.clone());
      }
      (field.as_str(), Bson::Document(bounds))
    }
    Condition::NotIn(field, values) => (field.as_str(), Bson::Document(doc! { "$nin": values.clone() })),
  };

  let mut clause = Document::new();
  clause.insert(field, predicate);
  clause
}
