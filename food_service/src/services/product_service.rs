// food_service/src/services/product_service.rs

use bson::{oid::ObjectId, Document};
use tracing::{debug, info, instrument, warn};

use super::{decode_all, disable, fetch, non_empty, restaurant_service, update_by_id, Messages};
use crate::errors::{AppError, Result};
use crate::models::{encode, parse_id, Product, ProductInput, ProductQuery};
use crate::store::{CollectionName, DocumentStore, Filter};

const PRODUCTS: CollectionName = CollectionName::Products;

const MESSAGES: Messages = Messages {
  not_found: "Producto no encontrado",
  invalid_id: "ID de producto no válido",
};

/// Creates a product for an existing restaurant. Name, description, price and
/// restaurant id are all required.
#[instrument(name = "product_service::create_product", skip(store, input))]
pub async fn create_product(store: &dyn DocumentStore, input: ProductInput) -> Result<Product> {
  const CONTEXT: &str = "Error al crear el producto";

  let (Some(name), Some(description), Some(price), Some(raw_restaurant_id)) = (
    non_empty(input.name.as_deref()),
    non_empty(input.description.as_deref()),
    input.price,
    non_empty(input.restaurant_id.as_deref()),
  ) else {
    return Err(AppError::Validation("Todos los campos son obligatorios.".to_string()));
  };
  let restaurant_id = parse_id(raw_restaurant_id, restaurant_service::MESSAGES.invalid_id)?;

  let restaurant_exists = store
    .find_by_id(CollectionName::Restaurants, restaurant_id)
    .await
    .map_err(AppError::store(CONTEXT))?
    .is_some();
  if !restaurant_exists {
    warn!(%restaurant_id, "Product references a missing restaurant.");
    return Err(AppError::NotFound(restaurant_service::MESSAGES.not_found.to_string()));
  }

  let product = Product {
    id: ObjectId::new(),
    name: Some(name.to_string()),
    description: Some(description.to_string()),
    price: Some(price),
    category: input.category,
    restaurant_id,
    enabled: true,
  };
  let doc = encode(&product).map_err(AppError::store(CONTEXT))?;
  store.insert(PRODUCTS, doc).await.map_err(AppError::store(CONTEXT))?;

  info!(product_id = %product.id, %restaurant_id, "Product created.");
  Ok(product)
}

#[instrument(name = "product_service::search_products", skip(store))]
pub async fn search_products(store: &dyn DocumentStore, query: ProductQuery) -> Result<Vec<Product>> {
  const CONTEXT: &str = "Error al buscar productos.";
  let mut filter = Filter::new();
  if let Some(raw_restaurant_id) = non_empty(query.restaurant_id.as_deref()) {
    let restaurant_id = parse_id(raw_restaurant_id, restaurant_service::MESSAGES.invalid_id)?;
    filter = filter.eq("restauranteId", restaurant_id);
  }
  if let Some(category) = non_empty(query.category.as_deref()) {
    filter = filter.eq("categoria", category);
  }

  let docs = store.find(PRODUCTS, &filter).await.map_err(AppError::store(CONTEXT))?;
  let products: Vec<Product> = decode_all(docs, CONTEXT)?;
  if products.is_empty() {
    return Err(AppError::NoMatches(
      "No se encontraron productos que coincidan con los criterios de búsqueda.".to_string(),
    ));
  }
  info!("Found {} products.", products.len());
  Ok(products)
}

#[instrument(name = "product_service::get_product", skip(store))]
pub async fn get_product(store: &dyn DocumentStore, raw_id: &str) -> Result<Product> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  fetch(store, PRODUCTS, id, MESSAGES, "Error al buscar el producto").await
}

/// Writes only the fields present in `patch`. A new restaurant id must be
/// well-formed but is not checked for existence.
#[instrument(name = "product_service::update_product", skip(store, patch))]
pub async fn update_product(store: &dyn DocumentStore, raw_id: &str, patch: ProductInput) -> Result<Product> {
  const CONTEXT: &str = "Error al actualizar el producto";
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;

  let mut set = Document::new();
  if let Some(name) = non_empty(patch.name.as_deref()) {
    set.insert("nombre", name);
  }
  if let Some(description) = non_empty(patch.description.as_deref()) {
    set.insert("descripcion", description);
  }
  if let Some(price) = patch.price {
    set.insert("precio", price);
  }
  if let Some(category) = non_empty(patch.category.as_deref()) {
    set.insert("categoria", category);
  }
  if let Some(raw_restaurant_id) = non_empty(patch.restaurant_id.as_deref()) {
    set.insert(
      "restauranteId",
      parse_id(raw_restaurant_id, restaurant_service::MESSAGES.invalid_id)?,
    );
  }

  if set.is_empty() {
    debug!("Product update carries no fields; returning the stored record.");
    return fetch(store, PRODUCTS, id, MESSAGES, CONTEXT).await;
  }

  let product: Product = update_by_id(store, PRODUCTS, id, set, MESSAGES, CONTEXT).await?;
  info!(product_id = %product.id, "Product updated.");
  Ok(product)
}

#[instrument(name = "product_service::disable_product", skip(store))]
pub async fn disable_product(store: &dyn DocumentStore, raw_id: &str) -> Result<Product> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let product: Product = disable(store, PRODUCTS, id, MESSAGES, "Error al inhabilitar el producto").await?;
  info!(product_id = %product.id, "Product disabled.");
  Ok(product)
}
