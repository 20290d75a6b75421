//! Application router
//!
//! Route registration and the tower-http middleware stack. The CORS layer
//! wraps only the `/api` subtree: the configured frontend origin may call
//! it with credentials, everything else stays same-origin.

use axum::{Json, Router, routing::get};
use http::{HeaderValue, Method, header};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::{Config, ServerState};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Build a router with all routes registered (no state applied)
pub fn build_router(config: &Config) -> Router<ServerState> {
    let api_routes = Router::new()
        .merge(api::empleados::router())
        .merge(api::cargos::router())
        .layer(cors_layer(config));

    Router::new()
        // Root welcome route - public
        .route("/", get(index))
        // Health API - public route
        .merge(api::health::router())
        // Entity APIs - CORS-restricted subtree
        .nest("/api", api_routes)
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}

/// Build the fully configured application with state attached
pub fn build_app(state: &ServerState) -> Router {
    build_router(&state.config).with_state(state.clone())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = HeaderValue::from_str(&config.cors_origin).unwrap_or_else(|_| {
        tracing::warn!(origin = %config.cors_origin, "Invalid CORS_ORIGIN, using default");
        HeaderValue::from_static(DEFAULT_CORS_ORIGIN)
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// GET / — welcome message
async fn index() -> Json<Value> {
    Json(json!({ "message": "Bienvenido a la API de Gestión Administrativa" }))
}
