#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use server::{routes, AppState};
use service::auth::{JwtVerifier, TokenVerifier};
use service::{PooledSessions, ServiceError, Session, SessionProvider};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub const SECRET: &str = "test-secret";

/// Fresh in-memory SQLite store with every migration applied.
/// One connection, so every session sees the same database.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Counts how many sessions the handlers asked for.
pub struct CountingSessions {
    inner: PooledSessions,
    pub acquired: AtomicUsize,
}

impl CountingSessions {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { inner: PooledSessions::new(db), acquired: AtomicUsize::new(0) }
    }

    pub fn count(&self) -> usize { self.acquired.load(Ordering::SeqCst) }
}

#[async_trait]
impl SessionProvider for CountingSessions {
    async fn acquire(&self) -> Result<Session, ServiceError> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.inner.acquire().await
    }
}

pub struct TestApp {
    pub router: Router,
    pub sessions: Arc<CountingSessions>,
    pub verifier: Arc<JwtVerifier>,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        let sessions = Arc::new(CountingSessions::new(memory_db().await?));
        let verifier = Arc::new(JwtVerifier::new(SECRET, 0));
        let state = AppState::new(sessions.clone(), verifier.clone() as Arc<dyn TokenVerifier>);
        let router = routes::build_router(state, CorsLayer::very_permissive());
        Ok(Self { router, sessions, verifier })
    }

    pub fn token(&self) -> String {
        self.verifier.issue("tester", Duration::from_secs(300)).expect("issue token")
    }

    /// Serve the router on an ephemeral port and return its base url.
    pub async fn spawn(&self) -> anyhow::Result<String> {
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr: SocketAddr = listener.local_addr()?;
        let app = self.router.clone();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
        });
        Ok(format!("http://{}:{}", addr.ip(), addr.port()))
    }
}
