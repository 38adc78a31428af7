use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::membership;
use crate::persistable::Persistable;
use crate::validation::{Validate, Violations, NAME_MAX_LEN};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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
pub struct GroupCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupUpdate {
    pub name: Option<String>,
}

impl Validate for GroupCreate {
    fn validate(&self) -> Result<(), ModelError> {
        Violations::new().name("name", &self.name, NAME_MAX_LEN).finish()
    }
}

impl Validate for GroupUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if let Some(name) = &self.name { v.name("name", name, NAME_MAX_LEN); }
        v.finish()
    }
}

impl Persistable for Entity {
    const NAME: &'static str = "group";

    type Create = GroupCreate;
    type Update = GroupUpdate;
    type Output = Model;

    fn id_column() -> Column { Column::Id }

    fn id(model: &Model) -> i32 { model.id }

    fn updated_at(model: &Model) -> DateTimeWithTimeZone { model.updated_at }

    fn from_create(input: GroupCreate, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn into_active(model: Model) -> ActiveModel { model.into() }

    fn apply_update(active: &mut ActiveModel, patch: GroupUpdate) -> bool {
        match patch.name {
            Some(name) => { active.name = Set(name); true }
            None => false,
        }
    }

    fn touch(active: &mut ActiveModel, at: DateTimeWithTimeZone) { active.updated_at = Set(at); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_name_deserializes_to_none() {
        let patch: GroupUpdate = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(patch.name.is_none());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn blank_name_in_patch_is_rejected() {
        let patch = GroupUpdate { name: Some("".into()) };
        assert_eq!(patch.validate().unwrap_err().violations()[0].field, "name");
    }

    #[test]
    fn create_builds_row_without_id() {
        let now = chrono::Utc::now().into();
        let am = Entity::from_create(GroupCreate { name: "Ramen".into() }, now);
        assert!(am.id.is_not_set());
        assert_eq!(am.name, Set("Ramen".to_string()));
        assert_eq!(am.created_at, am.updated_at);
    }
}
