use chrono::NaiveDate;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::schema::{FieldKind, FieldSpec, Schema};

/// One logged workout. `member_id` is a plain column: no relation is declared
/// and the database does not enforce that the member exists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Workoutsessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub session_id: i32,
    pub member_id: i32,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub const SCHEMA: Schema = Schema {
    entity: "workout session",
    key: "session_id",
    fields: &[
        FieldSpec::required("member_id", FieldKind::Integer),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required("duration_minutes", FieldKind::Integer),
        FieldSpec::required("calories_burned", FieldKind::Integer),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WorkoutSessionInput {
    pub member_id: i32,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
}

impl WorkoutSessionInput {
    pub fn from_json(payload: &serde_json::Value) -> Result<Self, ModelError> {
        SCHEMA.load(payload).map_err(ModelError::Validation)
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.member_id = Set(self.member_id);
        am.date = Set(self.date);
        am.duration_minutes = Set(self.duration_minutes);
        am.calories_burned = Set(self.calories_burned);
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel::new();
        self.apply(&mut am);
        am
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{INVALID_INTEGER, MISSING};
    use serde_json::json;

    #[test]
    fn parses_full_payload() {
        let input = WorkoutSessionInput::from_json(&json!({
            "member_id": 1, "date": "2024-01-01", "duration_minutes": 30, "calories_burned": 200
        }))
        .unwrap();
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(input.duration_minutes, Some(30));
    }

    #[test]
    fn non_integer_duration_and_missing_date_reported_together() {
        let err = WorkoutSessionInput::from_json(&json!({
            "member_id": 1, "duration_minutes": "half an hour", "calories_burned": 200
        }))
        .unwrap_err();
        let ModelError::Validation(fields) = err else { panic!("expected validation error") };
        assert_eq!(fields.get("duration_minutes").unwrap(), [INVALID_INTEGER]);
        assert_eq!(fields.get("date").unwrap(), [MISSING]);
    }

    #[test]
    fn date_serializes_as_calendar_date() {
        let m = Model {
            session_id: 3,
            member_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            duration_minutes: Some(30),
            calories_burned: None,
        };
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({"session_id": 3, "member_id": 1, "date": "2024-01-01", "duration_minutes": 30, "calories_burned": null})
        );
    }
}
