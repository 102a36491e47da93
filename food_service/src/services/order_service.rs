// food_service/src/services/order_service.rs

use bson::{doc, oid::ObjectId, Bson, DateTime};
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use super::{apply, decode_all, disable, fetch, non_empty, nullable, Messages};
use crate::errors::{AppError, Result};
use crate::models::order::{FROZEN_STATUSES, STATUS_SENT};
use crate::models::{encode, parse_id, Order, OrderInput, OrderLine, OrderLineInput, OrderQuery, OrderUpdate};
use crate::store::{CollectionName, DocumentStore, Filter};

const ORDERS: CollectionName = CollectionName::Orders;

const MESSAGES: Messages = Messages {
  not_found: "Pedido no encontrado",
  invalid_id: "ID de pedido no válido",
};

const FROZEN_MESSAGE: &str = "No se pueden modificar pedidos enviados o realizados";

fn parse_optional_id(raw: Option<&str>, message: &str) -> Result<Option<ObjectId>> {
  non_empty(raw).map(|value| parse_id(value, message)).transpose()
}

fn parse_lines(lines: Vec<OrderLineInput>) -> Result<Vec<OrderLine>> {
  lines
    .into_iter()
    .map(|line| {
      Ok(OrderLine {
        product_id: parse_id(&line.product_id, "ID de producto no válido")?,
        quantity: line.quantity,
      })
    })
    .collect()
}

/// Which end of a date range a bare `YYYY-MM-DD` value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
  Start,
  End,
}

/// Parses an RFC 3339 timestamp or a calendar date. A bare date covers the whole
/// day: midnight as a start bound, the day's last millisecond as an end bound.
fn parse_date(raw: &str, bound: Bound) -> Result<DateTime> {
  let raw = raw.trim();
  if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(raw) {
    return Ok(DateTime::from_millis(timestamp.timestamp_millis()));
  }

  let invalid = || AppError::Validation(format!("Fecha no válida: {}", raw));
  let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
  let moment = match bound {
    Bound::Start => date.and_hms_opt(0, 0, 0),
    Bound::End => date.and_hms_milli_opt(23, 59, 59, 999),
  }
  .ok_or_else(invalid)?;
  Ok(DateTime::from_millis(moment.and_utc().timestamp_millis()))
}

/// Stores a new order. Referenced ids must be well-formed; their existence is not checked.
#[instrument(name = "order_service::create_order", skip(store, input))]
pub async fn create_order(store: &dyn DocumentStore, input: OrderInput) -> Result<Order> {
  const CONTEXT: &str = "Error al crear el pedido";

  let order = Order {
    id: ObjectId::new(),
    user_id: parse_optional_id(input.user_id.as_deref(), "ID de usuario no válido")?,
    restaurant_id: parse_optional_id(input.restaurant_id.as_deref(), "ID de restaurante no válido")?,
    lines: parse_lines(input.lines)?,
    total: input.total,
    status: input.status,
    sent_by: input.sent_by,
    placed_at: DateTime::now(),
    enabled: true,
  };
  let doc = encode(&order).map_err(AppError::store(CONTEXT))?;
  store.insert(ORDERS, doc).await.map_err(AppError::store(CONTEXT))?;

  info!(order_id = %order.id, lines = order.lines.len(), "Order created.");
  Ok(order)
}

/// Orders matching every supplied filter. No match yields an empty list, not an error.
#[instrument(name = "order_service::filter_orders", skip(store))]
pub async fn filter_orders(store: &dyn DocumentStore, query: OrderQuery) -> Result<Vec<Order>> {
  const CONTEXT: &str = "Error al obtener los pedidos filtrados";

  let mut filter = Filter::new();
  if let Some(user_id) = parse_optional_id(query.user_id.as_deref(), "ID de usuario no válido")? {
    filter = filter.eq("usuarioId", user_id);
  }
  if let Some(restaurant_id) = parse_optional_id(query.restaurant_id.as_deref(), "ID de restaurante no válido")? {
    filter = filter.eq("restauranteId", restaurant_id);
  }
  if let Some(sent_by) = non_empty(query.sent_by.as_deref()) {
    filter = filter.eq("enviadoPor", sent_by);
  }
  let from = non_empty(query.from.as_deref())
    .map(|raw| parse_date(raw, Bound::Start))
    .transpose()?;
  let to = non_empty(query.to.as_deref())
    .map(|raw| parse_date(raw, Bound::End))
    .transpose()?;
  filter = filter.range("fechaPedido", from.map(Bson::from), to.map(Bson::from));

  let docs = store.find(ORDERS, &filter).await.map_err(AppError::store(CONTEXT))?;
  let orders: Vec<Order> = decode_all(docs, CONTEXT)?;
  info!("Filtered orders: {} match.", orders.len());
  Ok(orders)
}

/// Orders sent to a restaurant that have not moved on yet.
#[instrument(name = "order_service::list_sent_orders", skip(store))]
pub async fn list_sent_orders(store: &dyn DocumentStore) -> Result<Vec<Order>> {
  const CONTEXT: &str = "Error al obtener los pedidos enviados sin aceptar";
  let filter = Filter::new().eq("estado", STATUS_SENT);
  let docs = store.find(ORDERS, &filter).await.map_err(AppError::store(CONTEXT))?;
  decode_all(docs, CONTEXT)
}

#[instrument(name = "order_service::get_order", skip(store))]
pub async fn get_order(store: &dyn DocumentStore, raw_id: &str) -> Result<Order> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  fetch(store, ORDERS, id, MESSAGES, "Error al obtener el pedido").await
}

/// Overwrites lines, total and status unless the order is frozen.
///
/// The status guard is part of the update filter, so a concurrent transition
/// to a frozen status cannot be overwritten. When the guarded update matches
/// nothing the order is re-read to tell a missing order (404) from a frozen
/// one (403).
#[instrument(name = "order_service::update_order", skip(store, update))]
pub async fn update_order(store: &dyn DocumentStore, raw_id: &str, update: OrderUpdate) -> Result<Order> {
  const CONTEXT: &str = "Error al modificar el pedido";
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let lines = parse_lines(update.lines)?;
  let encoded_lines = lines
    .iter()
    .map(encode)
    .collect::<std::result::Result<Vec<_>, _>>()
    .map_err(AppError::store(CONTEXT))?;

  let set = doc! {
    "productos": encoded_lines,
    "total": nullable(update.total),
    "estado": nullable(update.status),
  };
  let frozen: Vec<Bson> = FROZEN_STATUSES.iter().map(|status| Bson::from(*status)).collect();
  let guarded = Filter::by_id(id).not_in("estado", frozen);

  // A second pass only happens if the status left a frozen value between the two reads.
  for _ in 0..2 {
    if let Some(order) = apply::<Order>(store, ORDERS, &guarded, set.clone(), CONTEXT).await? {
      info!(order_id = %order.id, "Order updated.");
      return Ok(order);
    }

    let current: Order = fetch(store, ORDERS, id, MESSAGES, CONTEXT).await?;
    if current.is_frozen() {
      warn!(order_id = %id, status = ?current.status, "Refusing to modify a frozen order.");
      return Err(AppError::Forbidden(FROZEN_MESSAGE.to_string()));
    }
  }

  Err(AppError::Internal(format!("Order {} kept changing during update", id)))
}

/// Disables the order whatever its status; frozen orders included.
#[instrument(name = "order_service::disable_order", skip(store))]
pub async fn disable_order(store: &dyn DocumentStore, raw_id: &str) -> Result<Order> {
  let id = parse_id(raw_id, MESSAGES.invalid_id)?;
  let order: Order = disable(store, ORDERS, id, MESSAGES, "Error al inhabilitar el pedido").await?;
  info!(order_id = %order.id, "Order disabled.");
  Ok(order)
}
