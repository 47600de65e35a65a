use models::workout_session::{self, WorkoutSessionInput};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::ServiceError;

#[instrument(skip(db))]
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<workout_session::Model>, ServiceError> {
    let rows = workout_session::Entity::find()
        .order_by_asc(workout_session::Column::SessionId)
        .all(db)
        .await?;
    Ok(rows)
}

/// Sessions logged for `member_id`; empty when the member has none or does not exist.
#[instrument(skip(db))]
pub async fn list_by_member(db: &DatabaseConnection, member_id: i32) -> Result<Vec<workout_session::Model>, ServiceError> {
    let rows = workout_session::Entity::find()
        .filter(workout_session::Column::MemberId.eq(member_id))
        .order_by_asc(workout_session::Column::SessionId)
        .all(db)
        .await?;
    Ok(rows)
}

#[instrument(skip(db))]
pub async fn get_by_id(db: &DatabaseConnection, session_id: i32) -> Result<workout_session::Model, ServiceError> {
    workout_session::Entity::find_by_id(session_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(workout_session::SCHEMA.entity, session_id))
}

#[instrument(skip(db, payload))]
pub async fn insert(db: &DatabaseConnection, payload: &Value) -> Result<workout_session::Model, ServiceError> {
    let input = WorkoutSessionInput::from_json(payload)?;
    let created = input.into_active_model().insert(db).await?;
    info!(session_id = created.session_id, member_id = created.member_id, "workout session inserted");
    Ok(created)
}

/// Replace every field of an existing session; `NotFound` is checked before validation.
#[instrument(skip(db, payload))]
pub async fn replace_by_id(
    db: &DatabaseConnection,
    session_id: i32,
    payload: &Value,
) -> Result<workout_session::Model, ServiceError> {
    let existing = get_by_id(db, session_id).await?;
    replace(db, existing, payload).await
}

#[instrument(skip(db, existing, payload), fields(session_id = existing.session_id))]
pub async fn replace(
    db: &DatabaseConnection,
    existing: workout_session::Model,
    payload: &Value,
) -> Result<workout_session::Model, ServiceError> {
    let input = WorkoutSessionInput::from_json(payload)?;
    let mut am: workout_session::ActiveModel = existing.into();
    input.apply(&mut am);
    let updated = am.update(db).await?;
    info!(session_id = updated.session_id, "workout session replaced");
    Ok(updated)
}

#[instrument(skip(db))]
pub async fn delete_by_id(db: &DatabaseConnection, session_id: i32) -> Result<(), ServiceError> {
    let res = workout_session::Entity::delete_by_id(session_id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(workout_session::SCHEMA.entity, session_id));
    }
    info!(session_id, "workout session deleted");
    Ok(())
}
