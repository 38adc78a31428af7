//! Request-scoped access to the store.
//!
//! A [`Session`] is handed out once per request by a [`SessionProvider`] and
//! dropped when the handler returns, whatever the outcome.

use std::time::Instant;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::trace;

use crate::database_service::DatabaseService;
use crate::errors::ServiceError;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn acquire(&self) -> Result<Session, ServiceError>;
}

pub struct Session {
    db: DatabaseConnection,
    opened_at: Instant,
}

impl Session {
    pub fn new(db: DatabaseConnection) -> Self {
        trace!("session acquired");
        Self { db, opened_at: Instant::now() }
    }

    pub fn service(&self) -> DatabaseService<'_> { DatabaseService::new(&self.db) }
}

impl Drop for Session {
    fn drop(&mut self) {
        trace!(held = ?self.opened_at.elapsed(), "session released");
    }
}

/// Sessions backed by a shared sea-orm pool.
#[derive(Clone)]
pub struct PooledSessions {
    db: DatabaseConnection,
}

impl PooledSessions {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl SessionProvider for PooledSessions {
    async fn acquire(&self) -> Result<Session, ServiceError> {
        Ok(Session::new(self.db.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::group::{self, GroupCreate};

    #[tokio::test]
    async fn sessions_share_the_pool() -> Result<(), anyhow::Error> {
        let provider = PooledSessions::new(get_db().await?);

        let created = {
            let session = provider.acquire().await?;
            session.service().create::<group::Entity>(GroupCreate { name: "Ramen".into() }).await?
        };

        let session = provider.acquire().await?;
        let found = session.service().get::<group::Entity>(created.id).await?;
        assert_eq!(found, Some(created));
        Ok(())
    }
}
