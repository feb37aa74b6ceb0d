use anyhow::anyhow;
use sqlx::{PgPool, Row};
use std::marker::PhantomData;

use crate::error::{ApiError, Result};
use crate::models::{Entity, EntityPayload};

pub mod user;

/// SQL for the uniform CRUD operations, derived once from an entity's table metadata.
#[derive(Debug, Clone)]
struct Statements {
    list: String,
    get: String,
    insert: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_entity<E: Entity>() -> Self {
        let columns = E::COLUMNS.join(", ");
        let select = format!("SELECT id, {} FROM {}", columns, E::TABLE_NAME);

        let placeholders = (1..=E::COLUMNS.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        let assignments = E::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            list: format!("{} ORDER BY id", select),
            get: format!("{} WHERE id = $1", select),
            insert: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
                E::TABLE_NAME,
                columns,
                placeholders
            ),
            update: format!(
                "UPDATE {} SET {} WHERE id = ${}",
                E::TABLE_NAME,
                assignments,
                E::COLUMNS.len() + 1
            ),
            delete: format!("DELETE FROM {} WHERE id = $1", E::TABLE_NAME),
        }
    }
}

/// CRUD access to one entity's table. Connections come from the shared pool
/// and go back to it when each query finishes, on success or error.
pub struct Repository<E> {
    pool: PgPool,
    statements: Statements,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            statements: Statements::for_entity::<E>(),
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All records ordered by id. An empty table yields an empty vec.
    pub async fn list(&self) -> Result<Vec<E>> {
        let records = sqlx::query_as::<_, E>(&self.statements.list)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(table = E::TABLE_NAME, count = records.len(), "Listed records");
        Ok(records)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<E>> {
        let record = sqlx::query_as::<_, E>(&self.statements.get)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Insert a new row and return it as stored, including the generated id.
    pub async fn create(&self, data: &E::Payload) -> Result<E> {
        let row = data
            .bind(sqlx::query(&self.statements.insert))
            .fetch_one(&self.pool)
            .await?;
        let id: i32 = row.try_get("id")?;

        tracing::info!(table = E::TABLE_NAME, id, "Created record");

        self.get_by_id(id).await?.ok_or_else(|| {
            ApiError::Internal(anyhow!("{} {} missing right after insert", E::NAME, id))
        })
    }

    /// Replace every mutable field. Returns `None` when no row has this id.
    pub async fn update(&self, id: i32, data: &E::Payload) -> Result<Option<E>> {
        let result = data
            .bind(sqlx::query(&self.statements.update))
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(table = E::TABLE_NAME, id, "Update matched no rows");
            return Ok(None);
        }

        tracing::info!(table = E::TABLE_NAME, id, "Updated record");
        self.get_by_id(id).await
    }

    /// Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query(&self.statements.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(table = E::TABLE_NAME, id, "Deleted record");
        }

        Ok(deleted)
    }
}
