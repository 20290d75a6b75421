//! Cargo API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::{AppError, AppResult, ServerState};
use crate::db::repository::{RepoError, cargo};
use crate::utils::AppJson;
use crate::utils::validation::{MAX_NAME_LEN, coerce_f64, coerce_i64, validate_required_text};
use shared::models::{Cargo, CargoCreate, CargoInsert, CargoPatch, CargoUpdate};

/// Acknowledgement body for logical deletes
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

fn validate_create(payload: CargoCreate) -> AppResult<CargoInsert> {
    let required = || {
        AppError::validation("El Nombre, Nivel y Sueldo Base son campos obligatorios.")
    };

    let nombre = payload.nombre.ok_or_else(required)?;
    validate_required_text(&nombre, "nombre", MAX_NAME_LEN)?;

    // nivel and sueldo_base accept numbers or numeric-looking strings
    let nivel = payload
        .nivel
        .as_ref()
        .and_then(coerce_i64)
        .ok_or_else(required)?;
    let sueldo_base = payload
        .sueldo_base
        .as_ref()
        .and_then(coerce_f64)
        .ok_or_else(required)?;
    if sueldo_base < 0.0 {
        return Err(AppError::validation("sueldo_base must not be negative"));
    }

    Ok(CargoInsert {
        nombre,
        nivel,
        sueldo_base,
    })
}

fn validate_update(payload: CargoUpdate) -> AppResult<CargoPatch> {
    if let Some(nombre) = &payload.nombre {
        validate_required_text(nombre, "nombre", MAX_NAME_LEN)?;
    }
    let nivel = match &payload.nivel {
        Some(v) => {
            Some(coerce_i64(v).ok_or_else(|| AppError::validation("nivel must be an integer"))?)
        }
        None => None,
    };
    let sueldo_base = match &payload.sueldo_base {
        Some(v) => {
            let s =
                coerce_f64(v).ok_or_else(|| AppError::validation("sueldo_base must be a number"))?;
            if s < 0.0 {
                return Err(AppError::validation("sueldo_base must not be negative"));
            }
            Some(s)
        }
        None => None,
    };

    let patch = CargoPatch {
        nombre: payload.nombre,
        nivel,
        sueldo_base,
    };
    if patch.is_empty() {
        return Err(AppError::validation(
            "No se proporcionaron datos para la actualización.",
        ));
    }
    Ok(patch)
}

/// GET /api/get/cargos — list all active cargos
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Cargo>>> {
    let cargos = cargo::find_all_active(&state.pool).await?;
    tracing::debug!(count = cargos.len(), "Cargos listed");
    Ok(Json(cargos))
}

/// POST /api/add/cargos — create a cargo
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CargoCreate>,
) -> AppResult<(StatusCode, Json<Cargo>)> {
    let data = validate_create(payload)?;
    let created = cargo::create(&state.pool, data).await.map_err(|e| match e {
        RepoError::Duplicate(detail) => {
            tracing::warn!(error = %detail, "Duplicate nivel creating cargo");
            AppError::conflict("Es posible que ya exista un cargo con ese nivel")
        }
        other => other.into(),
    })?;
    tracing::info!(id = created.id, nivel = created.nivel, "Cargo created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/put/cargos/{id} — update an active cargo
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<CargoUpdate>,
) -> AppResult<Json<Cargo>> {
    let patch = validate_update(payload)?;
    let updated = cargo::update(&state.pool, id, patch)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(detail) => {
                tracing::warn!(error = %detail, "Duplicate nivel updating cargo");
                AppError::conflict(
                    "Falló la actualización, es posible que ya exista un cargo con ese nivel",
                )
            }
            other => other.into(),
        })?
        .ok_or_else(|| {
            AppError::not_found(format!("Cargo con ID {id} no encontrado o está inactivo."))
        })?;
    tracing::info!(id, "Cargo updated");
    Ok(Json(updated))
}

/// DELETE /api/delete/cargos/{id} — soft-delete a cargo
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    let removed = cargo::deactivate(&state.pool, id).await?;
    if !removed {
        return Err(AppError::not_found(format!(
            "Cargo con ID {id} no encontrado o ya estaba inactivo."
        )));
    }
    tracing::info!(id, "Cargo deactivated");
    Ok(Json(DeleteResponse {
        message: format!("Cargo con ID {id} eliminado lógicamente."),
    }))
}
