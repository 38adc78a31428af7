use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::membership;
use crate::persistable::Persistable;
use crate::validation::{Validate, Violations, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Membership,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Membership => Entity::has_many(membership::Entity).into() }
    }
}

impl Related<membership::Entity> for Entity {
    fn to() -> RelationDef { Relation::Membership.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Validate for ItemCreate {
    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.name("name", &self.name, NAME_MAX_LEN);
        if let Some(d) = &self.description { v.max_len("description", d, DESCRIPTION_MAX_LEN); }
        v.finish()
    }
}

impl Validate for ItemUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if let Some(name) = &self.name { v.name("name", name, NAME_MAX_LEN); }
        if let Some(d) = &self.description { v.max_len("description", d, DESCRIPTION_MAX_LEN); }
        v.finish()
    }
}

impl Persistable for Entity {
    const NAME: &'static str = "item";

    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Output = Model;

    fn id_column() -> Column { Column::Id }

    fn id(model: &Model) -> i32 { model.id }

    fn updated_at(model: &Model) -> DateTimeWithTimeZone { model.updated_at }

    fn from_create(input: ItemCreate, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn into_active(model: Model) -> ActiveModel { model.into() }

    fn apply_update(active: &mut ActiveModel, patch: ItemUpdate) -> bool {
        let mut changed = false;
        if let Some(name) = patch.name { active.name = Set(name); changed = true; }
        // absent and null both mean "leave as is"; a description cannot be cleared through a patch
        if let Some(description) = patch.description { active.description = Set(Some(description)); changed = true; }
        changed
    }

    fn touch(active: &mut ActiveModel, at: DateTimeWithTimeZone) { active.updated_at = Set(at); }
}
