use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::crud::{create, delete, list, read, update, SharedRepo};
use super::handlers::health::{health_check, liveness_check};
use super::handlers::user::{search_users, users_with_books};
use crate::error::ApiError;
use crate::middleware::{log_requests, RequestIdLayer};
use crate::models::{Book, Entity, Student, User};
use crate::repository::Repository;

/// The five CRUD routes for one entity under `base`.
fn entity_routes<E: Entity>(base: &str, repo: SharedRepo<E>) -> Router {
    Router::new()
        .route(base, get(list::<E>).post(create::<E>))
        .route(
            &format!("{}/:id", base),
            get(read::<E>).put(update::<E>).delete(delete::<E>),
        )
        .with_state(repo)
}

pub fn student_routes(repo: SharedRepo<Student>) -> Router {
    entity_routes("/students", repo)
}

pub fn book_routes(repo: SharedRepo<Book>) -> Router {
    entity_routes("/books", repo)
}

pub fn user_routes(repo: SharedRepo<User>) -> Router {
    Router::new()
        .route("/users/search", get(search_users))
        .route("/users/with-books", get(users_with_books))
        .with_state(repo.clone())
        .merge(entity_routes("/users", repo))
}

pub fn health_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
        .with_state(pool)
}

/// The complete application: every entity router plus shared middleware.
pub fn app(pool: PgPool) -> Router {
    Router::new()
        .merge(student_routes(Arc::new(Repository::new(pool.clone()))))
        .merge(user_routes(Arc::new(Repository::new(pool.clone()))))
        .merge(book_routes(Arc::new(Repository::new(pool.clone()))))
        .merge(health_routes(pool))
        .fallback(|| async { ApiError::NotFound("Route") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_requests))
        .layer(RequestIdLayer)
}
