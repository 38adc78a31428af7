mod support;

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use service::auth::JwtVerifier;
use tower::ServiceExt;

use support::{TestApp, SECRET};

async fn body_json(res: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_missing_token_is_rejected_before_any_session() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let req = Request::builder().uri("/groups/").body(Body::empty())?;
    let res = app.router.clone().oneshot(req).await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(res).await?;
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(app.sessions.count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_malformed_and_foreign_tokens() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let req = Request::builder()
        .uri("/items/")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())?;
    let res = app.router.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let other = JwtVerifier::new("some-other-secret", 0).issue("intruder", Duration::from_secs(60))?;
    let req = Request::builder()
        .method("POST")
        .uri("/items/")
        .header(header::AUTHORIZATION, format!("Bearer {other}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"name": "Minca"}).to_string()))?;
    let res = app.router.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(app.sessions.count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_valid_token_reaches_handler() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let token = JwtVerifier::new(SECRET, 0).issue("tester", Duration::from_secs(60))?;

    let req = Request::builder()
        .method("POST")
        .uri("/groups")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"name": "Ramen"}).to_string()))?;
    let res = app.router.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = body_json(res).await?;
    assert_eq!(body["name"], "Ramen");
    assert_eq!(app.sessions.count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_health_skips_verification() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let req = Request::builder().uri("/health").body(Body::empty())?;
    let res = app.router.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(app.sessions.count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_verified_subject_flows_to_every_mutation() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let bearer = format!("Bearer {}", app.token());
    let send = |method: &str, uri: &str, body: Option<Value>| {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, bearer.as_str())
            .header(header::CONTENT_TYPE, "application/json");
        builder.body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
    };

    let res = app.router.clone().oneshot(send("POST", "/items/", Some(json!({"name": "Minca"})))?).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = body_json(res).await?["id"].as_i64().unwrap_or_default();

    let res = app.router.clone().oneshot(send("PATCH", &format!("/items/{id}"), Some(json!({"name": "Shio"})))?).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(send("DELETE", &format!("/items/{id}"), None)?).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await?["name"], "Shio");
    Ok(())
}
