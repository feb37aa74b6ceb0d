use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::extractors::{EntityId, ValidatedJson};
use crate::models::Entity;
use crate::repository::Repository;

pub type SharedRepo<E> = Arc<Repository<E>>;

/// List all records
pub async fn list<E: Entity>(State(repo): State<SharedRepo<E>>) -> Result<Json<Vec<E>>> {
    Ok(Json(repo.list().await?))
}

/// Read a record by id
pub async fn read<E: Entity>(
    State(repo): State<SharedRepo<E>>,
    id: EntityId<E>,
) -> Result<Json<E>> {
    repo.get_by_id(id.get())
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(E::NAME))
}

/// Create a record
pub async fn create<E: Entity>(
    State(repo): State<SharedRepo<E>>,
    ValidatedJson(data): ValidatedJson<E::Payload>,
) -> Result<(StatusCode, Json<E>)> {
    let record = repo.create(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace all fields of a record
pub async fn update<E: Entity>(
    State(repo): State<SharedRepo<E>>,
    id: EntityId<E>,
    ValidatedJson(data): ValidatedJson<E::Payload>,
) -> Result<Json<E>> {
    repo.update(id.get(), &data)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(E::NAME))
}

/// Delete a record
pub async fn delete<E: Entity>(
    State(repo): State<SharedRepo<E>>,
    id: EntityId<E>,
) -> Result<StatusCode> {
    if repo.delete(id.get()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(E::NAME))
    }
}
