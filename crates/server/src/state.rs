use std::sync::Arc;

use service::{auth::TokenVerifier, SessionProvider};

/// Collaborators shared by every request. Swapping either one is how tests
/// run the real router against an in-memory store or a permissive verifier.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionProvider>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { sessions, verifier }
    }
}
