//! End-to-end API tests
//!
//! Drive the fully assembled router (routes, CORS, state) through oneshot
//! calls against a temporary on-disk database, without the network stack.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use gestion_server::routes;
use gestion_server::{Config, ServerState};

/// Fresh app over a tempdir-backed database. The TempDir must stay alive
/// for the duration of the test.
async fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("gestion-test.db");
    let config = Config::with_overrides(db_path.to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    let app = routes::build_app(&state);
    (dir, app)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_cargo_full_lifecycle() {
    let (_dir, app) = test_app().await;

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/add/cargos",
        Some(json!({"nombre": "Analista", "nivel": 2, "sueldo_base": 1200.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["estatus"], 1);
    assert_eq!(created["sueldo_base"], 1200.0);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    // Listed
    let (status, listed) = send(&app, "GET", "/api/get/cargos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        listed
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["id"].as_i64() == Some(id))
    );

    // Deactivate
    let (status, body) = send(&app, "DELETE", &format!("/api/delete/cargos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("eliminado"));

    // Gone from the active list
    let (_, listed) = send(&app, "GET", "/api/get/cargos", None).await;
    assert!(listed.as_array().unwrap().is_empty());

    // Updating a deactivated cargo is a 404
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/put/cargos/{id}"),
        Some(json!({"nombre": "Analista Senior"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // So is a second delete
    let (status, _) = send(&app, "DELETE", &format!("/api/delete/cargos/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cargo_validation_and_coercion() {
    let (_dir, app) = test_app().await;

    // Missing sueldo_base
    let (status, body) = send(
        &app,
        "POST",
        "/api/add/cargos",
        Some(json!({"nombre": "Analista", "nivel": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // Numeric-looking strings are coerced
    let (status, created) = send(
        &app,
        "POST",
        "/api/add/cargos",
        Some(json!({"nombre": "Gerente", "nivel": "3", "sueldo_base": "2500.5"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["nivel"], 3);
    assert_eq!(created["sueldo_base"], 2500.5);

    // Negative salary rejected
    let (status, _) = send(
        &app,
        "POST",
        "/api/add/cargos",
        Some(json!({"nombre": "Becario", "nivel": 9, "sueldo_base": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cargo_duplicate_nivel_conflict() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/add/cargos",
        Some(json!({"nombre": "Analista", "nivel": 2, "sueldo_base": 1200.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/add/cargos",
        Some(json!({"nombre": "Otro", "nivel": 2, "sueldo_base": 1500.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_empleado_full_lifecycle() {
    let (_dir, app) = test_app().await;

    let payload = json!({
        "cedula": 12345678,
        "nombre": "Ana Pérez",
        "cargo": "Analista",
        "fecha_nacimiento": "1990-05-17",
        "sexo": "F",
        "fecha_ingreso": "2020-01-06",
        "telefono": 4141234567i64,
        "correo": "ana@example.com"
    });
    let (status, created) = send(&app, "POST", "/api/add/empleados", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["estatus"], 1);
    // Dates round-trip as the same ISO string
    assert_eq!(created["fecha_nacimiento"], "1990-05-17");
    assert_eq!(created["fecha_ingreso"], "2020-01-06");

    // Partial update touches only the provided field
    let (status, updated) = send(
        &app,
        "PUT",
        "/api/put/empleados/12345678",
        Some(json!({"nombre": "Ana P. Ruiz"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nombre"], "Ana P. Ruiz");
    assert_eq!(updated["correo"], "ana@example.com");
    assert_eq!(updated["fecha_nacimiento"], "1990-05-17");

    // Active list contains the record
    let (_, listed) = send(&app, "GET", "/api/get/empleados", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Deactivate, then everything reports not-found
    let (status, _) = send(&app, "DELETE", "/api/delete/empleados/12345678", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, "GET", "/api/get/empleados", None).await;
    assert!(listed.as_array().unwrap().is_empty());

    let (status, _) = send(&app, "DELETE", "/api/delete/empleados/12345678", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empleado_validation_errors() {
    let (_dir, app) = test_app().await;

    // Missing nombre
    let (status, body) = send(
        &app,
        "POST",
        "/api/add/empleados",
        Some(json!({"cedula": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // Bad date format
    let (status, _) = send(
        &app,
        "POST",
        "/api/add/empleados",
        Some(json!({"cedula": 1, "nombre": "Ana", "fecha_ingreso": "06/01/2020"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Malformed JSON body
    let request = Request::builder()
        .method("POST")
        .uri("/api/add/empleados")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Empty update body
    let (status, _) = send(&app, "PUT", "/api/put/empleados/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empleado_duplicate_conflicts() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/add/empleados",
        Some(json!({"cedula": 100, "nombre": "Ana", "correo": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same cedula
    let (status, body) = send(
        &app,
        "POST",
        "/api/add/empleados",
        Some(json!({"cedula": 100, "nombre": "Otra"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "La Cédula o el Correo ya existen");

    // Same correo on a different cedula
    let (status, _) = send(
        &app,
        "POST",
        "/api/add/empleados",
        Some(json!({"cedula": 101, "nombre": "Berta", "correo": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Updating into a taken correo
    let (status, _) = send(
        &app,
        "POST",
        "/api/add/empleados",
        Some(json!({"cedula": 102, "nombre": "Clara", "correo": "clara@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "PUT",
        "/api/put/empleados/102",
        Some(json!({"correo": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cors_applies_to_api_subtree_only() {
    let (_dir, app) = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/get/empleados")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    // Routes outside /api stay same-origin
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_index_and_health() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Bienvenido"));

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
