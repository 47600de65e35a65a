use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use models::workout_session;
use service::workout_sessions;
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{JsonPayload, RecordId},
    state::ServerState,
};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<workout_session::Model>>, ApiError> {
    let rows = workout_sessions::list_all(&state.db).await?;
    info!(count = rows.len(), "list workout sessions");
    Ok(Json(rows))
}

/// `GET /workoutsessions/{id}`: the id is a member id. A member without
/// sessions yields an empty array, not 404.
pub async fn list_for_member(
    State(state): State<ServerState>,
    RecordId(member_id): RecordId,
) -> Result<Json<Vec<workout_session::Model>>, ApiError> {
    let rows = workout_sessions::list_by_member(&state.db, member_id).await?;
    info!(member_id, count = rows.len(), "list workout sessions for member");
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    body: JsonPayload,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let payload = body.into_value()?;
    let s = workout_sessions::insert(&state.db, &payload).await?;
    info!(session_id = s.session_id, member_id = s.member_id, "created workout session");
    Ok((StatusCode::CREATED, Json(Message::new("New workout added successfully"))))
}

pub async fn update(
    State(state): State<ServerState>,
    RecordId(session_id): RecordId,
    body: JsonPayload,
) -> Result<Json<Message>, ApiError> {
    let existing = workout_sessions::get_by_id(&state.db, session_id).await?;
    let payload = body.into_value()?;
    workout_sessions::replace(&state.db, existing, &payload).await?;
    info!(session_id, "updated workout session");
    Ok(Json(Message::new("Workout details updated successfully")))
}

pub async fn delete(State(state): State<ServerState>, RecordId(session_id): RecordId) -> Result<Json<Message>, ApiError> {
    workout_sessions::delete_by_id(&state.db, session_id).await?;
    info!(session_id, "deleted workout session");
    Ok(Json(Message::new("Workout removed successfully")))
}
