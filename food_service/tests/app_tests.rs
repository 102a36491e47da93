// tests/app_tests.rs
#[macro_use]
mod common;

use actix_web::http::{Method, StatusCode};
use actix_web::test;
use common::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn health_reports_the_store_backend() {
  let (state, _store) = test_state();
  let app = spawn_app!(state);

  let req = test::TestRequest::get().uri("/health").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!({ "status": "ok", "store": "memory" }));
}

#[actix_web::test]
async fn malformed_ids_are_bad_requests_on_every_route() {
  let (state, _store) = test_state();
  let app = spawn_app!(state);

  let cases: Vec<(Method, String, Option<Value>)> = vec![
    (Method::GET, format!("/usuarios?_id={}", MALFORMED_ID), None),
    (
      Method::PUT,
      format!("/usuarios/{}", MALFORMED_ID),
      Some(json!({ "correoElectronico": "a@b.com", "contraseña": "x" })),
    ),
    (Method::PATCH, format!("/usuarios/{}/deshabilitar", MALFORMED_ID), None),
    (Method::GET, format!("/restaurantes/{}", MALFORMED_ID), None),
    (Method::PUT, format!("/restaurantes/{}", MALFORMED_ID), Some(json!({ "nombre": "x" }))),
    (Method::PATCH, format!("/restaurantes/{}/deshabilitar", MALFORMED_ID), None),
    (Method::GET, format!("/productos/{}", MALFORMED_ID), None),
    (Method::PUT, format!("/productos/{}", MALFORMED_ID), Some(json!({ "precio": 1 }))),
    (Method::PATCH, format!("/productos/{}/inhabilitar", MALFORMED_ID), None),
    (Method::GET, format!("/pedidos/{}", MALFORMED_ID), None),
    (Method::PUT, format!("/pedidos/{}", MALFORMED_ID), Some(json!({ "productos": [] }))),
    (Method::PUT, format!("/pedidos/inhabilitar/{}", MALFORMED_ID), None),
  ];

  for (method, uri, body) in cases {
    let mut req = test::TestRequest::default().method(method.clone()).uri(&uri);
    if let Some(body) = body {
      req = req.set_json(body);
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{} {}", method, uri);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("no válido"), "{} {}", method, uri);
  }
}

#[actix_web::test]
async fn malformed_json_bodies_are_bad_requests() {
  let (state, _store) = test_state();
  let app = spawn_app!(state);

  let req = test::TestRequest::post()
    .uri("/pedidos")
    .insert_header(("content-type", "application/json"))
    .set_payload("{\"productos\": 5}")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert!(body["error"].is_string());
}

#[actix_web::test]
async fn absent_ids_are_not_found_on_every_route() {
  let (state, _store) = test_state();
  let app = spawn_app!(state);
  let id = absent_id();

  let cases: Vec<(Method, String, Option<Value>)> = vec![
    (Method::GET, format!("/usuarios?id={}", id), None),
    (
      Method::PUT,
      format!("/usuarios/{}", id),
      Some(json!({ "correoElectronico": "a@b.com", "contraseña": "x" })),
    ),
    (Method::PATCH, format!("/usuarios/{}/deshabilitar", id), None),
    (Method::GET, format!("/restaurantes/{}", id), None),
    (Method::PUT, format!("/restaurantes/{}", id), Some(json!({ "nombre": "x" }))),
    (Method::PATCH, format!("/restaurantes/{}/deshabilitar", id), None),
    (Method::GET, format!("/productos/{}", id), None),
    (Method::PUT, format!("/productos/{}", id), Some(json!({ "precio": 1 }))),
    (Method::PATCH, format!("/productos/{}/inhabilitar", id), None),
    (Method::GET, format!("/pedidos/{}", id), None),
    (Method::PUT, format!("/pedidos/{}", id), Some(json!({ "productos": [] }))),
    (Method::PUT, format!("/pedidos/inhabilitar/{}", id), None),
  ];

  for (method, uri, body) in cases {
    let mut req = test::TestRequest::default().method(method.clone()).uri(&uri);
    if let Some(body) = body {
      req = req.set_json(body);
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().ends_with("no encontrado"), "{} {}", method, uri);
  }
}
