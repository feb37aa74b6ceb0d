use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::validation::FieldRule;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// A flat record stored in its own table with a `SERIAL` primary key named `id`.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// The client-supplied fields used by create and full replace.
    type Payload: EntityPayload;

    /// Display name used in not-found messages, e.g. "Student".
    const NAME: &'static str;
    /// Lowercase name used in id validation messages, e.g. "student".
    const LABEL: &'static str;
    const TABLE_NAME: &'static str;
    /// Mutable columns, in the order `EntityPayload::bind` binds them.
    const COLUMNS: &'static [&'static str];
}

pub trait EntityPayload: DeserializeOwned + Send + Sync + 'static {
    const RULES: &'static [FieldRule];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}
