// food_service/src/web/handlers/mod.rs

// One handler module per record kind
pub mod order_handlers;
pub mod product_handlers;
pub mod restaurant_handlers;
pub mod user_handlers;
