use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use models::member;
use service::members;
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{JsonPayload, RecordId},
    state::ServerState,
};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<member::Model>>, ApiError> {
    let rows = members::list_all(&state.db).await?;
    info!(count = rows.len(), "list members");
    Ok(Json(rows))
}

pub async fn get(State(state): State<ServerState>, RecordId(id): RecordId) -> Result<Json<member::Model>, ApiError> {
    let m = members::get_by_id(&state.db, id).await?;
    Ok(Json(m))
}

pub async fn create(
    State(state): State<ServerState>,
    body: JsonPayload,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let payload = body.into_value()?;
    let m = members::insert(&state.db, &payload).await?;
    info!(id = m.id, "created member");
    Ok((StatusCode::CREATED, Json(Message::new("New member added successfully"))))
}

pub async fn update(
    State(state): State<ServerState>,
    RecordId(id): RecordId,
    body: JsonPayload,
) -> Result<Json<Message>, ApiError> {
    // a missing id wins over any problem with the body
    let existing = members::get_by_id(&state.db, id).await?;
    let payload = body.into_value()?;
    members::replace(&state.db, existing, &payload).await?;
    info!(id, "updated member");
    Ok(Json(Message::new("Member details updated successfully")))
}

pub async fn delete(State(state): State<ServerState>, RecordId(id): RecordId) -> Result<Json<Message>, ApiError> {
    members::delete_by_id(&state.db, id).await?;
    info!(id, "deleted member");
    Ok(Json(Message::new("Member removed successfully")))
}
