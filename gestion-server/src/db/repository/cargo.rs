//! Cargo Repository

use super::RepoResult;
use shared::models::{Cargo, CargoInsert, CargoPatch};
use sqlx::SqlitePool;

const CARGO_SELECT: &str = "SELECT id, nombre, nivel, sueldo_base, estatus FROM cargos";

/// Find all active cargos, ordered by nivel
pub async fn find_all_active(pool: &SqlitePool) -> RepoResult<Vec<Cargo>> {
    let sql = format!("{CARGO_SELECT} WHERE estatus = 1 ORDER BY nivel");
    let rows = sqlx::query_as::<_, Cargo>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Insert a new cargo and return the persisted row with its generated id
///
/// A nivel collision among active rows surfaces as `RepoError::Duplicate`.
pub async fn create(pool: &SqlitePool, data: CargoInsert) -> RepoResult<Cargo> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO cargos (nombre, nivel, sueldo_base, estatus) VALUES (?1, ?2, ?3, 1)",
    )
    .bind(&data.nombre)
    .bind(data.nivel)
    .bind(data.sueldo_base)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    let sql = format!("{CARGO_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Cargo>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(row)
}

/// Apply a sparse patch to an active cargo
///
/// Returns `Ok(None)` when the row is missing or inactive.
pub async fn update(pool: &SqlitePool, id: i64, data: CargoPatch) -> RepoResult<Option<Cargo>> {
    let mut tx = pool.begin().await?;

    let sql = format!("{CARGO_SELECT} WHERE id = ? AND estatus = 1");
    let existing = sqlx::query_as::<_, Cargo>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Ok(None);
    }

    sqlx::query(
        "UPDATE cargos SET nombre = COALESCE(?1, nombre), nivel = COALESCE(?2, nivel), sueldo_base = COALESCE(?3, sueldo_base) WHERE id = ?4",
    )
    .bind(&data.nombre)
    .bind(data.nivel)
    .bind(data.sueldo_base)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let sql = format!("{CARGO_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Cargo>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(row))
}

/// Soft-delete an active cargo; false when no active row matched
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("UPDATE cargos SET estatus = 0 WHERE id = ? AND estatus = 1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(rows.rows_affected() > 0)
}
