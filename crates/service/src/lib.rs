//! Service layer: the generic CRUD service plus the collaborators the HTTP
//! layer injects per request.
//! - `database_service`: get / all / create / update / delete over any `Persistable` entity.
//! - `session`: request-scoped store access.
//! - `auth`: bearer-token verification.

pub mod errors;
pub mod database_service;
pub mod session;
pub mod auth;
#[cfg(test)]
pub mod test_support;

pub use database_service::DatabaseService;
pub use errors::ServiceError;
pub use session::{PooledSessions, Session, SessionProvider};
