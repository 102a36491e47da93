// tests/restaurant_routes_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn create_restaurant_defaults_to_enabled() {
  let (state, _store) = test_state();
  let app = spawn_app!(state);

  let req = test::TestRequest::post()
    .uri("/restaurantes")
    .set_json(json!({ "nombre": "El Fogón", "categoria": "parrilla", "popularidad": 4 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  let id = body["_id"].as_str().unwrap().to_string();

  let req = test::TestRequest::get().uri(&format!("/restaurantes/{}", id)).to_request();
  let restaurant: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(restaurant["nombre"], "El Fogón");
  assert_eq!(restaurant["popularidad"], 4.0);
  assert_eq!(restaurant["habilitado"], true);
}

#[actix_web::test]
async fn search_filters_by_category_and_name_fragment() {
  let (state, store) = test_state();
  seed_restaurant(&store, "Pizzería Napoli", "italiana").await;
  seed_restaurant(&store, "Trattoria Roma", "italiana").await;
  seed_restaurant(&store, "Sushi Go", "japonesa").await;
  let app = spawn_app!(state);

  let req = test::TestRequest::get()
    .uri("/restaurantes/busqueda?categoria=italiana")
    .to_request();
  let found: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(found.as_array().unwrap().len(), 2);

  let req = test::TestRequest::get()
    .uri("/restaurantes/busqueda?categoria=italiana&nombre=NAPOLI")
    .to_request();
  let found: Value = test::call_and_read_body_json(&app, req).await;
  let names: Vec<&str> = found.as_array().unwrap().iter().map(|r| r["nombre"].as_str().unwrap()).collect();
  assert_eq!(names, vec!["Pizzería Napoli"]);

  let req = test::TestRequest::get().uri("/restaurantes/busqueda").to_request();
  let found: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(found.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn empty_search_is_not_found_with_message() {
  let (state, store) = test_state();
  seed_restaurant(&store, "Sushi Go", "japonesa").await;
  let app = spawn_app!(state);

  let req = test::TestRequest::get()
    .uri("/restaurantes/busqueda?categoria=mexicana")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({ "message": "No se encontraron restaurantes que coincidan con los criterios de búsqueda." })
  );
}

#[actix_web::test]
async fn update_overwrites_all_fields() {
  let (state, store) = test_state();
  let id = seed_restaurant(&store, "Sushi Go", "japonesa").await;
  let app = spawn_app!(state);

  let req = test::TestRequest::put()
    .uri(&format!("/restaurantes/{}", id.to_hex()))
    .set_json(json!({ "nombre": "Sushi Go Go", "popularidad": 3.5 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated: Value = test::read_body_json(resp).await;
  assert_eq!(updated["nombre"], "Sushi Go Go");
  assert_eq!(updated["popularidad"], 3.5);
  assert!(updated.get("categoria").is_none());

  let req = test::TestRequest::put()
    .uri(&format!("/restaurantes/{}", absent_id()))
    .set_json(json!({ "nombre": "Nadie" }))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn disabled_restaurant_still_shows_in_lookups() {
  let (state, store) = test_state();
  let id = seed_restaurant(&store, "Sushi Go", "japonesa").await.to_hex();
  let app = spawn_app!(state);

  let req = test::TestRequest::patch()
    .uri(&format!("/restaurantes/{}/deshabilitar", id))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!({ "message": "Restaurante deshabilitado con éxito" }));

  let req = test::TestRequest::get().uri(&format!("/restaurantes/{}", id)).to_request();
  let restaurant: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(restaurant["habilitado"], false);

  let req = test::TestRequest::get()
    .uri("/restaurantes/busqueda?categoria=japonesa")
    .to_request();
  let found: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(found.as_array().unwrap().len(), 1);
}
