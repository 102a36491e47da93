// food_service/src/services/restaurant_service.rs

use bson::{doc, oid::ObjectId};
use tracing::{info, instrument};

use super::{decode_all, disable, fetch, non_empty, nullable, update_by_id, Messages};
use crate::errors::{AppError, Result};
use crate::models::{encode, parse_id, Restaurant, RestaurantInput, RestaurantQuery};
use crate::store::{CollectionName, DocumentStore, Filter};

const RESTAURANTS: CollectionName = CollectionName::Restaurants;

pub(crate) const MESSAGES: Messages = Messages {
  not_found: "Restaurante no encontrado",
  invalid_id: "ID de restaurante no válido",
};

#[instrument(name = "restaurant_service::create_restaurant", skip(store, input))]
pub async fn create_restaurant(store: &dyn DocumentStore, input: RestaurantInput) -> Result<Restaurant> {
  const CONTEXT: &str = "Error al crear el restaurante";
  let name = non_empty(input.name.as_deref())
    .ok_or_else(|| AppError::Validation("El nombre del restaurante es obligatorio".to_string()))?
    .to_string();

  let restaurant = Restaurant {
    id: ObjectId::new(),
    name: Some(name),
    category: input.category,
    popularity: input.popularity,
    enabled: true,
  };
  let doc = encode(&restaurant).map_err(AppError::store(CONTEXT))?;
  store.insert(RESTAURANTS, doc).await.map_err(AppError::store(CONTEXT))?;

  info!(restaurant_id = %restaurant.id, "Restaurant created.");
  Ok(restaurant)
}

/// Exact match on category, case-insensitive substring on name. An empty
/// result is reported as not found.
#[instrument(name = "restaurant_service::search_restaurants", skip(store))]
pub async fn search_restaurants(store: &dyn DocumentStore, query: RestaurantQuery) -> Result<Vec<Restaurant>> {
  const CONTEXT: &str = "Error al buscar restaurantes.";
  let mut filter = Filter::new();
  if let Some(category) = non_empty(query.category.as_deref()) {
    filter = filter.eq("categoria", category);
  }
  if let Some(name) = non_empty(query.name.as_deref()) {
    filter = filter.contains_ignore_case("nombre", name);
  }

  let docs = store.find(RESTAURANTS, &filter).await.map_err(AppError::store(CONTEXT))?;
  let restaurants: Vec<Restaurant> = decode_all(docs, CONTEXT)?;
  if restaurants.is_empty() {
    return Err(AppError::NoMatches(
      "No se encontraron restaurantes que coincidan con los criterios de búsqueda.".to_string(),
    ));
  }
  info!("Found {} restaurants.", restaurants.len());
  Ok(restaurants)
}

#[instrument(name = "restaurant_service::get_restaurant", skip(store))]
pub async fn get_restaurant(store: &dyn DocumentStore, raw_id: &str) -> Result<Restaurant> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  fetch(store, RESTAURANTS, id, MESSAGES, "Error al buscar el restaurante").await
}

/// Overwrites name, category and popularity; missing fields are cleared.
#[instrument(name = "restaurant_service::update_restaurant", skip(store, input))]
pub async fn update_restaurant(
  store: &dyn DocumentStore,
  raw_id: &str,
  input: RestaurantInput,
) -> Result<Restaurant> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let set = doc! {
    "nombre": nullable(input.name),
    "categoria": nullable(input.category),
    "popularidad": nullable(input.popularity),
  };
  let restaurant: Restaurant = update_by_id(store, RESTAURANTS, id, set, MESSAGES, "Error interno del servidor").await?;
  info!(restaurant_id = %restaurant.id, "Restaurant updated.");
  Ok(restaurant)
}

#[instrument(name = "restaurant_service::disable_restaurant", skip(store))]
pub async fn disable_restaurant(store: &dyn DocumentStore, raw_id: &str) -> Result<Restaurant> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let restaurant: Restaurant = disable(store, RESTAURANTS, id, MESSAGES, "Error al deshabilitar el restaurante").await?;
  info!(restaurant_id = %restaurant.id, "Restaurant disabled.");
  Ok(restaurant)
}
