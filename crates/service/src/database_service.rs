//! Generic persistence service.
//!
//! One `DatabaseService` wraps a borrowed connection and exposes the five
//! CRUD operations for any [`Persistable`] entity. Every mutation runs inside
//! its own transaction and commits before returning.

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{debug, info, instrument};

use models::Persistable;

use crate::errors::ServiceError;

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

pub struct DatabaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self { Self { db } }

    /// Point lookup by primary key. A missing row is `Ok(None)`.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get<E: Persistable>(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        let found = E::find().filter(E::id_column().eq(id)).one(self.db).await?;
        debug!(found = found.is_some(), "get");
        Ok(found)
    }

    /// Rows in primary-key order, skipping `skip` and returning at most `limit`.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn all<E: Persistable>(&self, skip: u64, limit: u64) -> Result<Vec<E::Model>, ServiceError> {
        // OFFSET binds as i64
        let skip = skip.min(i64::MAX as u64);
        let rows = E::find()
            .order_by_asc(E::id_column())
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;
        debug!(count = rows.len(), "all");
        Ok(rows)
    }

    /// Insert a row built from `input` and return it as stored.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn create<E: Persistable>(&self, input: E::Create) -> Result<E::Model, ServiceError> {
        let active = E::from_create(input, Utc::now().into());
        let txn = self.db.begin().await?;
        let inserted = E::insert(active).exec(&txn).await?;
        let created = E::find_by_id(inserted.last_insert_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("{} vanished after insert", E::NAME)))?;
        txn.commit().await?;
        info!(id = E::id(&created), "created");
        Ok(created)
    }

    /// Merge the provided fields of `patch` into row `id`.
    #[instrument(skip(self, patch), fields(entity = E::NAME))]
    pub async fn update<E: Persistable>(&self, id: i32, patch: E::Update) -> Result<E::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let existing = E::find()
            .filter(E::id_column().eq(id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::NAME, id))?;

        let previous = E::updated_at(&existing);
        let mut active = E::into_active(existing.clone());
        if !E::apply_update(&mut active, patch) {
            txn.commit().await?;
            debug!(id, "empty patch, nothing to write");
            return Ok(existing);
        }
        // never move updated_at backwards, even if the clock does
        let now: DateTimeWithTimeZone = Utc::now().into();
        E::touch(&mut active, std::cmp::max(now, previous));

        E::update_many()
            .set(active)
            .filter(E::id_column().eq(id))
            .exec(&txn)
            .await?;
        let updated = E::find()
            .filter(E::id_column().eq(id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::NAME, id))?;
        txn.commit().await?;
        info!(id, "updated");
        Ok(updated)
    }

    /// Remove row `id` and hand back what it looked like just before.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn delete<E: Persistable>(&self, id: i32) -> Result<E::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let snapshot = E::find()
            .filter(E::id_column().eq(id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::NAME, id))?;
        E::delete_many().filter(E::id_column().eq(id)).exec(&txn).await?;
        txn.commit().await?;
        info!(id, "deleted");
        Ok(snapshot)
    }
}
