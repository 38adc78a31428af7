use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::persistable::Persistable;
use crate::validation::{Validate, Violations};
use crate::{group, item};

/// Association row linking one group to one item.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "memberships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub item_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Group, Item }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Group => Entity::belongs_to(group::Entity).from(Column::GroupId).to(group::Column::Id).into(),
            Relation::Item => Entity::belongs_to(item::Entity).from(Column::ItemId).to(item::Column::Id).into(),
        }
    }
}

impl Related<group::Entity> for Entity {
    fn to() -> RelationDef { Relation::Group.def() }
}

impl Related<item::Entity> for Entity {
    fn to() -> RelationDef { Relation::Item.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipCreate {
    pub group_id: i32,
    pub item_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MembershipUpdate {
    pub group_id: Option<i32>,
    pub item_id: Option<i32>,
}

impl Validate for MembershipCreate {
    fn validate(&self) -> Result<(), ModelError> {
        Violations::new()
            .reference("group_id", self.group_id)
            .reference("item_id", self.item_id)
            .finish()
    }
}

impl Validate for MembershipUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        if let Some(id) = self.group_id { v.reference("group_id", id); }
        if let Some(id) = self.item_id { v.reference("item_id", id); }
        v.finish()
    }
}

impl Persistable for Entity {
    const NAME: &'static str = "membership";

    type Create = MembershipCreate;
    type Update = MembershipUpdate;
    type Output = Model;

    fn id_column() -> Column { Column::Id }

    fn id(model: &Model) -> i32 { model.id }

    fn updated_at(model: &Model) -> DateTimeWithTimeZone { model.updated_at }

    fn from_create(input: MembershipCreate, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            group_id: Set(input.group_id),
            item_id: Set(input.item_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn into_active(model: Model) -> ActiveModel { model.into() }

    fn apply_update(active: &mut ActiveModel, patch: MembershipUpdate) -> bool {
        let mut changed = false;
        if let Some(id) = patch.group_id { active.group_id = Set(id); changed = true; }
        if let Some(id) = patch.item_id { active.item_id = Set(id); changed = true; }
        changed
    }

    fn touch(active: &mut ActiveModel, at: DateTimeWithTimeZone) { active.updated_at = Set(at); }
}
