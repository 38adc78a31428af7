//! Bearer-token verification.
//!
//! Handlers never see tokens: the HTTP layer calls a [`TokenVerifier`] once
//! per request and rejects the request before any store access on failure.

pub mod errors;
pub mod verifier;

pub use errors::AuthError;
pub use verifier::{bearer_token, Claims, JwtVerifier, TokenVerifier};
