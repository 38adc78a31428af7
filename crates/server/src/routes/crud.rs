//! The five CRUD endpoints, written once and instantiated per entity.

use axum::{http::StatusCode, routing::get, Extension, Json, Router};
use common::pagination::Page;
use models::Persistable;
use service::{auth::Claims, ServiceError};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{ApiPath, ApiQuery, DbSession, ValidJson};
use crate::state::AppState;

/// Mount `GET|POST /{collection}/` and `GET|PATCH|DELETE /{collection}/:id` for `E`.
pub fn router<E: Persistable>(collection: &str) -> Router<AppState> {
    let base = format!("/{collection}");
    Router::new()
        .route(&base, get(list::<E>).post(create::<E>))
        .route(&format!("{base}/"), get(list::<E>).post(create::<E>))
        .route(&format!("{base}/:id"), get(fetch::<E>).patch(update::<E>).delete(remove::<E>))
}

async fn list<E: Persistable>(
    ApiQuery(page): ApiQuery<Page>,
    DbSession(session): DbSession,
) -> Result<Json<Vec<E::Output>>, JsonApiError> {
    let (skip, limit) = page.normalize();
    let rows = session.service().all::<E>(skip, limit).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

async fn fetch<E: Persistable>(
    ApiPath(id): ApiPath<i32>,
    DbSession(session): DbSession,
) -> Result<Json<E::Output>, JsonApiError> {
    match session.service().get::<E>(id).await? {
        Some(model) => Ok(Json(model.into())),
        None => Err(ServiceError::not_found(E::NAME, id).into()),
    }
}

async fn create<E: Persistable>(
    Extension(claims): Extension<Claims>,
    DbSession(session): DbSession,
    ValidJson(input): ValidJson<E::Create>,
) -> Result<(StatusCode, Json<E::Output>), JsonApiError> {
    let created = session.service().create::<E>(input).await?;
    info!(entity = E::NAME, id = E::id(&created), sub = %claims.sub, "create");
    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn update<E: Persistable>(
    ApiPath(id): ApiPath<i32>,
    Extension(claims): Extension<Claims>,
    DbSession(session): DbSession,
    ValidJson(patch): ValidJson<E::Update>,
) -> Result<Json<E::Output>, JsonApiError> {
    let updated = session.service().update::<E>(id, patch).await?;
    info!(entity = E::NAME, id, sub = %claims.sub, "update");
    Ok(Json(updated.into()))
}

async fn remove<E: Persistable>(
    ApiPath(id): ApiPath<i32>,
    Extension(claims): Extension<Claims>,
    DbSession(session): DbSession,
) -> Result<Json<E::Output>, JsonApiError> {
    let snapshot = session.service().delete::<E>(id).await?;
    info!(entity = E::NAME, id, sub = %claims.sub, "delete");
    Ok(Json(snapshot.into()))
}
