//! Request extractors that report bad ids and bodies with the service's JSON error bodies.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use models::schema::{FieldErrors, SCHEMA_KEY};
use serde_json::Value;

use crate::errors::ApiError;

/// Integer `{id}` path segment. Anything else cannot name a record, so it is
/// answered with 404 like any other missing id.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound(e.body_text()))?;
        raw.parse::<i32>()
            .map(RecordId)
            .map_err(|_| ApiError::NotFound(format!("no record with id {raw:?}")))
    }
}

/// JSON body, left untyped for schema validation. Parsing never rejects the
/// request: the outcome is held until the handler asks for it with
/// [`JsonPayload::into_value`], so a route can look its record up first.
#[derive(Debug)]
pub struct JsonPayload(Result<Value, String>);

impl JsonPayload {
    /// The parsed body, or a `_schema` validation error when the body is not
    /// JSON or was not sent as `application/json`.
    pub fn into_value(self) -> Result<Value, ApiError> {
        self.0
            .map_err(|msg| ApiError::Validation(FieldErrors::single(SCHEMA_KEY, msg)))
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = Json::<Value>::from_request(req, state)
            .await
            .map(|Json(value)| value)
            .map_err(|rejection| rejection.body_text());
        Ok(Self(parsed))
    }
}
