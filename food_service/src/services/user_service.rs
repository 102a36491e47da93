// food_service/src/services/user_service.rs

use bson::{doc, oid::ObjectId};
use tracing::{debug, info, instrument, warn};

use super::{disable, fetch, non_empty, nullable, update_by_id, Messages};
use crate::errors::{AppError, Result};
use crate::models::{decode, encode, parse_id, User, UserInput, UserLookup};
use crate::store::{CollectionName, DocumentStore, Filter};

const USERS: CollectionName = CollectionName::Users;

const MESSAGES: Messages = Messages {
  not_found: "Usuario no encontrado",
  invalid_id: "ID de usuario no válido",
};

/// Email and password are the two fields a user record cannot exist without.
fn required_credentials(input: &UserInput) -> Result<(String, String)> {
  match (non_empty(input.email.as_deref()), non_empty(input.password.as_deref())) {
    (Some(email), Some(password)) => Ok((email.to_string(), password.to_string())),
    _ => Err(AppError::Validation(
      "El correo electrónico y la contraseña son obligatorios".to_string(),
    )),
  }
}

#[instrument(name = "user_service::create_user", skip(store, input))]
pub async fn create_user(store: &dyn DocumentStore, input: UserInput) -> Result<User> {
  const CONTEXT: &str = "Error al crear el usuario";
  let (email, password) = required_credentials(&input)?;

  let user = User {
    id: ObjectId::new(),
    name: input.name,
    email,
    password,
    phone: input.phone,
    address: input.address,
    role: input.role,
    enabled: true,
  };
  let doc = encode(&user).map_err(AppError::store(CONTEXT))?;
  store.insert(USERS, doc).await.map_err(AppError::store(CONTEXT))?;

  info!(user_id = %user.id, "User created.");
  Ok(user)
}

/// Finds a user by id when a non-blank one is given, otherwise by email and password.
#[instrument(name = "user_service::lookup_user", skip(store, lookup), fields(by_id = non_empty(lookup.id.as_deref()).is_some()))]
pub async fn lookup_user(store: &dyn DocumentStore, lookup: UserLookup) -> Result<User> {
  const CONTEXT: &str = "Error al buscar el usuario";

  if let Some(raw_id) = non_empty(lookup.id.as_deref()) {
    let id = parse_id(raw_id, MESSAGES.invalid_id)?;
    return fetch(store, USERS, id, MESSAGES, CONTEXT).await;
  }

  match (non_empty(lookup.email.as_deref()), non_empty(lookup.password.as_deref())) {
    (Some(email), Some(password)) => {
      let filter = Filter::new().eq("correoElectronico", email).eq("contraseña", password);
      let doc = store
        .find_one(USERS, &filter)
        .await
        .map_err(AppError::store(CONTEXT))?
        .ok_or_else(|| {
          debug!("No user matches the supplied credentials.");
          AppError::NotFound(MESSAGES.not_found.to_string())
        })?;
      decode(doc).map_err(AppError::store(CONTEXT))
    }
    _ => {
      warn!("User lookup without an id or a complete credential pair.");
      Err(AppError::Validation("Parámetros no válidos".to_string()))
    }
  }
}

/// Replaces every profile field of the user. Fields missing from `input` are cleared.
#[instrument(name = "user_service::update_user", skip(store, input))]
pub async fn update_user(store: &dyn DocumentStore, raw_id: &str, input: UserInput) -> Result<User> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let (email, password) = required_credentials(&input)?;

  let set = doc! {
    "nombre": nullable(input.name),
    "correoElectronico": email,
    "contraseña": password,
    "numeroCelular": nullable(input.phone),
    "direccion": nullable(input.address),
    "rol": nullable(input.role),
  };
  let user: User = update_by_id(store, USERS, id, set, MESSAGES, "Error al actualizar el usuario").await?;
  info!(user_id = %user.id, "User updated.");
  Ok(user)
}

#[instrument(name = "user_service::disable_user", skip(store))]
pub async fn disable_user(store: &dyn DocumentStore, raw_id: &str) -> Result<User> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let user: User = disable(store, USERS, id, MESSAGES, "Error al deshabilitar el usuario").await?;
  info!(user_id = %user.id, "User disabled.");
  Ok(user)
}
