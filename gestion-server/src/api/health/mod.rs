//! Health check route
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /health | GET | public, includes a database probe |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health router — public route, outside the CORS-restricted API subtree
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall status (ok | error)
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Database probe result (ok | error)
    database: &'static str,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "Health database probe failed");
            "error"
        }
    };
    Json(HealthResponse {
        status: database,
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
