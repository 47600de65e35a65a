use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::schema::{FieldKind, FieldSpec, Schema};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub const SCHEMA: Schema = Schema {
    entity: "member",
    key: "id",
    fields: &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("age", FieldKind::Integer),
    ],
};

/// Writable member fields, as accepted by create and full replace.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberInput {
    pub name: String,
    pub age: Option<i32>,
}

impl MemberInput {
    pub fn from_json(payload: &serde_json::Value) -> Result<Self, ModelError> {
        SCHEMA.load(payload).map_err(ModelError::Validation)
    }

    /// Overwrite every writable column of `am`.
    pub fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.age = Set(self.age);
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel::new();
        self.apply(&mut am);
        am
    }
}
