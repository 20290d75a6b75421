//! Cargo API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

/// Cargo routes, mounted under `/api`
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/get/cargos", get(handler::list))
        .route("/add/cargos", post(handler::create))
        .route("/put/cargos/{id}", put(handler::update))
        .route("/delete/cargos/{id}", delete(handler::delete))
}
