use thiserror::Error;

/// Why a request failed authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("malformed Authorization header (expect `Bearer <token>`)")]
    Malformed,
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::MissingToken => 1001,
            AuthError::Malformed => 1002,
            AuthError::Expired => 1003,
            AuthError::InvalidToken(_) => 1004,
            AuthError::TokenError(_) => 1102,
        }
    }
}
