//! Empleado API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::{AppError, AppResult, ServerState};
use crate::db::repository::{RepoError, empleado};
use crate::utils::AppJson;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, parse_iso_date, validate_optional_text,
    validate_required_text,
};
use shared::models::{Empleado, EmpleadoCreate, EmpleadoInsert, EmpleadoPatch, EmpleadoUpdate};

/// Acknowledgement body for logical deletes
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

fn validate_create(payload: EmpleadoCreate) -> AppResult<EmpleadoInsert> {
    let (Some(cedula), Some(nombre)) = (payload.cedula, payload.nombre) else {
        return Err(AppError::validation(
            "La Cédula y el Nombre son campos obligatorios.",
        ));
    };
    validate_required_text(&nombre, "nombre", MAX_NAME_LEN)?;
    validate_optional_text(&payload.cargo, "cargo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.sexo, "sexo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.correo, "correo", MAX_EMAIL_LEN)?;

    Ok(EmpleadoInsert {
        cedula,
        nombre,
        cargo: payload.cargo,
        fecha_nacimiento: parse_iso_date(payload.fecha_nacimiento.as_deref(), "fecha_nacimiento")?,
        sexo: payload.sexo,
        fecha_ingreso: parse_iso_date(payload.fecha_ingreso.as_deref(), "fecha_ingreso")?,
        telefono: payload.telefono,
        correo: payload.correo,
    })
}

fn validate_update(payload: EmpleadoUpdate) -> AppResult<EmpleadoPatch> {
    let provided = payload.nombre.is_some()
        || payload.cargo.is_some()
        || payload.fecha_nacimiento.is_some()
        || payload.sexo.is_some()
        || payload.fecha_ingreso.is_some()
        || payload.telefono.is_some()
        || payload.correo.is_some();
    if !provided {
        return Err(AppError::validation(
            "No se proporcionaron datos para la actualización.",
        ));
    }

    if let Some(nombre) = &payload.nombre {
        validate_required_text(nombre, "nombre", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.cargo, "cargo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.sexo, "sexo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.correo, "correo", MAX_EMAIL_LEN)?;

    Ok(EmpleadoPatch {
        nombre: payload.nombre,
        cargo: payload.cargo,
        fecha_nacimiento: parse_iso_date(payload.fecha_nacimiento.as_deref(), "fecha_nacimiento")?,
        sexo: payload.sexo,
        fecha_ingreso: parse_iso_date(payload.fecha_ingreso.as_deref(), "fecha_ingreso")?,
        telefono: payload.telefono,
        correo: payload.correo,
    })
}

/// GET /api/get/empleados — list all active empleados
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Empleado>>> {
    let empleados = empleado::find_all_active(&state.pool).await?;
    tracing::debug!(count = empleados.len(), "Empleados listed");
    Ok(Json(empleados))
}

/// POST /api/add/empleados — create an empleado
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmpleadoCreate>,
) -> AppResult<(StatusCode, Json<Empleado>)> {
    let data = validate_create(payload)?;
    let created = empleado::create(&state.pool, data).await.map_err(|e| match e {
        RepoError::Duplicate(detail) => {
            tracing::warn!(error = %detail, "Duplicate key creating empleado");
            AppError::conflict("La Cédula o el Correo ya existen")
        }
        other => other.into(),
    })?;
    tracing::info!(cedula = created.cedula, "Empleado created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/put/empleados/{cedula} — update an active empleado
pub async fn update(
    State(state): State<ServerState>,
    Path(cedula): Path<i64>,
    AppJson(payload): AppJson<EmpleadoUpdate>,
) -> AppResult<Json<Empleado>> {
    let patch = validate_update(payload)?;
    let updated = empleado::update(&state.pool, cedula, patch)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(detail) => {
                tracing::warn!(error = %detail, "Duplicate correo updating empleado");
                AppError::conflict("Falló la actualización, posible Correo duplicado")
            }
            other => other.into(),
        })?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Empleado con cédula {cedula} no encontrado o está inactivo."
            ))
        })?;
    tracing::info!(cedula, "Empleado updated");
    Ok(Json(updated))
}

/// DELETE /api/delete/empleados/{cedula} — soft-delete an empleado
pub async fn delete(
    State(state): State<ServerState>,
    Path(cedula): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    let removed = empleado::deactivate(&state.pool, cedula).await?;
    if !removed {
        return Err(AppError::not_found(format!(
            "Empleado con cédula {cedula} no encontrado o ya estaba inactivo."
        )));
    }
    tracing::info!(cedula, "Empleado deactivated");
    Ok(Json(DeleteResponse {
        message: format!("Empleado con cédula {cedula} eliminado lógicamente."),
    }))
}
