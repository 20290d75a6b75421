//! Empleado API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

/// Empleado routes, mounted under `/api`
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/get/empleados", get(handler::list))
        .route("/add/empleados", post(handler::create))
        .route("/put/empleados/{cedula}", put(handler::update))
        .route("/delete/empleados/{cedula}", delete(handler::delete))
}
