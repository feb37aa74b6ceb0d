use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

use crate::error::ApiError;
use crate::models::{Entity, EntityPayload};
use crate::validation::{parse_entity_id, validate_fields};

/// A positive integer id taken from the `:id` path segment of an entity route.
/// Rejects with 400 before the handler runs.
#[derive(Debug)]
pub struct EntityId<E> {
    id: i32,
    _entity: PhantomData<fn() -> E>,
}

impl<E> EntityId<E> {
    pub fn get(&self) -> i32 {
        self.id
    }
}

#[async_trait]
impl<S, E> FromRequestParts<S> for EntityId<E>
where
    E: Entity,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId(E::LABEL))?;

        Ok(EntityId {
            id: parse_entity_id(&raw, E::LABEL)?,
            _entity: PhantomData,
        })
    }
}

/// JSON body checked against the payload's field rules, then deserialized.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: EntityPayload,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(from_json_rejection)?;

        validate_fields(&body, T::RULES)?;

        let payload = serde_json::from_value(body)
            .map_err(|e| ApiError::InvalidJson(format!("Invalid JSON data: {}", e)))?;

        Ok(ValidatedJson(payload))
    }
}

fn from_json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            ApiError::InvalidJson(format!("Invalid JSON data: {}", err))
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::InvalidJson(format!("Failed to parse the request body as JSON: {}", err))
        }
        JsonRejection::MissingJsonContentType(err) => {
            ApiError::UnsupportedMediaType(format!("Missing JSON Content-Type: {}", err))
        }
        JsonRejection::BytesRejection(err) => {
            ApiError::InvalidJson(format!("Failed to read request body: {}", err))
        }
        _ => ApiError::InvalidJson("Failed to parse JSON".to_string()),
    }
}

/// Query string extractor whose rejection is a JSON 400 like every other error.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;

        Ok(ApiQuery(value))
    }
}
