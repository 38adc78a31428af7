use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pooled connection using the sizes and timeouts from `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts).await.map_err(|e| ModelError::Db(e.to_string()))?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database pool ready");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> DatabaseConfig {
        DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 1, min_connections: 1, ..Default::default() }
    }

    #[tokio::test]
    async fn connects_from_config_alone() {
        let db = connect_with_config(&memory()).await.unwrap();
        assert_eq!(db.get_database_backend(), sea_orm::DatabaseBackend::Sqlite);
    }

    #[tokio::test]
    async fn unreachable_url_is_a_db_error() {
        let cfg = DatabaseConfig { url: "sqlite:///nonexistent-dir/none.db?mode=ro".into(), connect_timeout_secs: 1, acquire_timeout_secs: 1, ..memory() };
        let err = connect_with_config(&cfg).await.unwrap_err();
        assert!(matches!(err, ModelError::Db(_)));
    }
}
