//! Contract shared by every stored entity.
//!
//! A `Persistable` entity has an auto-assigned integer primary key and the
//! `created_at` / `updated_at` pair. It also names the three schemas that
//! travel over the wire: the Create input, the all-optional Update input and
//! the Output projection. The generic database service only ever talks to
//! entities through this trait.

use sea_orm::entity::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::validation::Validate;

pub trait Persistable: EntityTrait<Model: Send + Sync, ActiveModel: Send + Sync> + 'static {
    /// Singular name used in logs and not-found errors.
    const NAME: &'static str;

    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;
    type Output: Serialize + From<Self::Model> + Send + 'static;

    fn id_column() -> Self::Column;

    fn id(model: &Self::Model) -> i32;

    fn updated_at(model: &Self::Model) -> DateTimeWithTimeZone;

    /// Build a new row; the id is left for the store to assign.
    fn from_create(input: Self::Create, now: DateTimeWithTimeZone) -> Self::ActiveModel;

    fn into_active(model: Self::Model) -> Self::ActiveModel;

    /// Copy every provided field of `patch` onto `active`.
    /// Returns `false` when the patch carried nothing.
    fn apply_update(active: &mut Self::ActiveModel, patch: Self::Update) -> bool;

    fn touch(active: &mut Self::ActiveModel, at: DateTimeWithTimeZone);
}
