use axum::{extract::State, Json};
use serde::Deserialize;

use super::crud::SharedRepo;
use crate::error::{ApiError, Result};
use crate::extractors::ApiQuery;
use crate::models::{User, UserWithBooks};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Search users by username or email
pub async fn search_users(
    State(repo): State<SharedRepo<User>>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Vec<User>>> {
    let term = params
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingSearchTerm)?;

    Ok(Json(repo.search(&term).await?))
}

/// List users with their books
pub async fn users_with_books(
    State(repo): State<SharedRepo<User>>,
) -> Result<Json<Vec<UserWithBooks>>> {
    Ok(Json(repo.list_with_books().await?))
}
