use axum::{extract::{Request, State}, http::header::AUTHORIZATION, middleware::Next, response::Response};
use service::auth::bearer_token;
use tracing::warn;

use crate::{errors::JsonApiError, state::AppState};

/// 校验 Authorization: Bearer <token>；失败直接 401，不会进入 handler，也不会获取数据库会话。
/// 通过后把 claims 放进 request extensions。
pub async fn require_bearer_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let verified = bearer_token(header).and_then(|token| state.verifier.verify(token));

    match verified {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %req.uri().path(), method = %req.method(), code = e.code(), err = %e, "token verification failed");
            Err(e.into())
        }
    }
}
