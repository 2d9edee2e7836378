use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use server::routes::{self, AppState};
use service::account::repository::mock::MockAccountRepository;
use service::account::AccountService;
use service::message::repository::mock::MockMessageRepository;
use service::message::MessageService;

fn cors() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::very_permissive()
}

fn build_app() -> Router {
    let state = AppState {
        accounts: Arc::new(AccountService::new(Arc::new(MockAccountRepository::default()))),
        messages: Arc::new(MessageService::new(Arc::new(MockMessageRepository::default()))),
    };
    routes::build_router(cors(), state)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_returns_account_with_generated_id() -> anyhow::Result<()> {
    let app = build_app();

    let req = post_json("/register", &json!({"username": "alice", "password": "pass1"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body, json!({"account_id": 1, "username": "alice", "password": "pass1"}));
    Ok(())
}

#[tokio::test]
async fn test_register_duplicate_username_rejected() -> anyhow::Result<()> {
    let app = build_app();

    let req = post_json("/register", &json!({"username": "alice", "password": "pass1"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = post_json("/register", &json!({"username": "alice", "password": "xyz"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_register_blank_username_rejected() -> anyhow::Result<()> {
    let app = build_app();

    let req = post_json("/register", &json!({"username": "", "password": "pass1234"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_register_short_password_rejected() -> anyhow::Result<()> {
    let app = build_app();

    let req = post_json("/register", &json!({"username": "alice", "password": "abc"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_login_flow() -> anyhow::Result<()> {
    let app = build_app();

    let req = post_json("/register", &json!({"username": "alice", "password": "pass1"}));
    let _ = app.clone().call(req).await?;

    let req = post_json("/login", &json!({"username": "alice", "password": "pass1"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["account_id"], 1);
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    let app = build_app();

    let req = post_json("/register", &json!({"username": "alice", "password": "pass1"}));
    let _ = app.clone().call(req).await?;

    let req = post_json("/login", &json!({"username": "alice", "password": "wrong"}));
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app();

    let req = Request::builder().method("GET").uri("/health").body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}
