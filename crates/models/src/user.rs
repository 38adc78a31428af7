use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::persistable::Persistable;
use crate::validation::{Validate, Violations, NAME_MAX_LEN};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), ModelError> {
        Violations::new()
            .email("email", &self.email)
            .name("name", &self.name, NAME_MAX_LEN)
            .finish()
    }
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if let Some(email) = &self.email { v.email("email", email); }
        if let Some(name) = &self.name { v.name("name", name, NAME_MAX_LEN); }
        v.finish()
    }
}

impl Persistable for Entity {
    const NAME: &'static str = "user";

    type Create = UserCreate;
    type Update = UserUpdate;
    type Output = Model;

    fn id_column() -> Column { Column::Id }

    fn id(model: &Model) -> i32 { model.id }

    fn updated_at(model: &Model) -> DateTimeWithTimeZone { model.updated_at }

    fn from_create(input: UserCreate, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            email: Set(input.email.trim().to_string()),
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn into_active(model: Model) -> ActiveModel { model.into() }

    fn apply_update(active: &mut ActiveModel, patch: UserUpdate) -> bool {
        let mut changed = false;
        if let Some(email) = patch.email { active.email = Set(email.trim().to_string()); changed = true; }
        if let Some(name) = patch.name { active.name = Set(name); changed = true; }
        changed
    }

    fn touch(active: &mut ActiveModel, at: DateTimeWithTimeZone) { active.updated_at = Set(at); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored() -> Model {
        let now = Utc::now().into();
        Model { id: 7, email: "bob@example.com".into(), name: "Bob".into(), created_at: now, updated_at: now }
    }

    #[test]
    fn create_requires_email_and_name() {
        let bad = UserCreate { email: "bob".into(), name: " ".into() };
        let err = bad.validate().unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert!(UserCreate { email: "bob@example.com".into(), name: "Bob".into() }.validate().is_ok());
    }

    #[test]
    fn empty_update_is_valid_and_changes_nothing() {
        let patch = UserUpdate::default();
        assert!(patch.validate().is_ok());
        let mut am = Entity::into_active(stored());
        assert!(!Entity::apply_update(&mut am, patch));
        assert!(!am.is_changed());
    }

    #[test]
    fn update_sets_only_provided_fields() {
        let mut am = Entity::into_active(stored());
        let patch: UserUpdate = serde_json::from_str(r#"{"name": "Robert", "email": null}"#).unwrap();
        assert!(Entity::apply_update(&mut am, patch));
        assert_eq!(am.name, Set("Robert".to_string()));
        assert!(!am.email.is_set());
    }
}
