use models::member::{self, MemberInput};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::ServiceError;

/// List every member ordered by id.
#[instrument(skip(db))]
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<member::Model>, ServiceError> {
    let rows = member::Entity::find()
        .order_by_asc(member::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Fetch one member; a missing id is `NotFound`.
#[instrument(skip(db))]
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<member::Model, ServiceError> {
    member::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(member::SCHEMA.entity, id))
}

/// Validate the payload and insert a new member. The database assigns the id.
#[instrument(skip(db, payload))]
pub async fn insert(db: &DatabaseConnection, payload: &Value) -> Result<member::Model, ServiceError> {
    let input = MemberInput::from_json(payload)?;
    let created = input.into_active_model().insert(db).await?;
    info!(id = created.id, "member inserted");
    Ok(created)
}

/// Overwrite name and age of an existing member.
/// The lookup runs first, so a missing id is reported before the payload is checked.
#[instrument(skip(db, payload))]
pub async fn replace_by_id(db: &DatabaseConnection, id: i32, payload: &Value) -> Result<member::Model, ServiceError> {
    let existing = get_by_id(db, id).await?;
    replace(db, existing, payload).await
}

/// Overwrite an already fetched member. Callers that must report a missing id
/// before reading the request body look the row up themselves and end here.
#[instrument(skip(db, existing, payload), fields(id = existing.id))]
pub async fn replace(db: &DatabaseConnection, existing: member::Model, payload: &Value) -> Result<member::Model, ServiceError> {
    let input = MemberInput::from_json(payload)?;
    let mut am: member::ActiveModel = existing.into();
    input.apply(&mut am);
    let updated = am.update(db).await?;
    info!(id = updated.id, "member replaced");
    Ok(updated)
}

#[instrument(skip(db))]
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = member::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(member::SCHEMA.entity, id));
    }
    info!(id, "member deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::schema::{INVALID_INTEGER, MISSING};
    use serde_json::json;

    #[tokio::test]
    async fn member_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = insert(&db, &json!({"name": "Alice", "age": 30})).await?;
        let found = get_by_id(&db, a.id).await?;
        assert_eq!(found.name, "Alice");
        assert_eq!(found.age, Some(30));

        let updated = replace_by_id(&db, a.id, &json!({"name": "Alicia", "age": 31})).await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(get_by_id(&db, a.id).await?.age, Some(31));

        delete_by_id(&db, a.id).await?;
        assert!(matches!(get_by_id(&db, a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_never_falls_back_to_another_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let first = insert(&db, &json!({"name": "First", "age": 20})).await?;
        let second = insert(&db, &json!({"name": "Second", "age": 40})).await?;

        assert_eq!(get_by_id(&db, second.id).await?.name, "Second");
        assert!(matches!(get_by_id(&db, second.id + 100).await, Err(ServiceError::NotFound(_))));

        let all = list_all(&db).await?;
        assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![first.id, second.id]);
        Ok(())
    }

    #[tokio::test]
    async fn replace_missing_member_creates_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let err = replace_by_id(&db, 999, &json!({"name": "X", "age": 1})).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        // lookup happens before validation
        let err = replace_by_id(&db, 999, &json!({"age": "old"})).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert!(list_all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_payload_reports_all_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = insert(&db, &json!({"age": "thirty"})).await.unwrap_err();
        let ServiceError::Validation(fields) = err else { panic!("expected validation error") };
        assert_eq!(fields.get("name").unwrap(), [MISSING]);
        assert_eq!(fields.get("age").unwrap(), [INVALID_INTEGER]);
        assert!(list_all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_then_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let m = insert(&db, &json!({"name": "Bob", "age": 50})).await?;
        delete_by_id(&db, m.id).await?;
        assert!(matches!(delete_by_id(&db, m.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = insert(&db, &json!({"name": "A", "age": 1})).await?;
        let b = insert(&db, &json!({"name": "B", "age": 2})).await?;
        delete_by_id(&db, b.id).await?;
        let c = insert(&db, &json!({"name": "C", "age": 3})).await?;
        assert!(c.id > b.id);
        assert_ne!(c.id, a.id);
        Ok(())
    }
}
