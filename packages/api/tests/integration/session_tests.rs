use std::sync::Arc;

use gazeta_api::types::ProfileUpdate;
use gazeta_api::{ApiError, MemoryStore, PreferenceStore, Session, TOKEN_KEY};
use serde_json::json;

use crate::support::{route, user_json, MockApi};

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let api = MockApi::start(vec![
        route(
            "POST",
            "/api/auth/login",
            200,
            json!({ "user": user_json(4, "Aziz"), "access_token": "jwt-4" }),
        ),
        route("GET", "/api/auth/profile", 200, user_json(4, "Aziz")),
    ])
    .await;
    let store = Arc::new(MemoryStore::new());

    let mut session = Session::restore(api.client(), store.clone());
    assert!(!session.is_authenticated());

    let user = session
        .login(" reader@gazeta.uz ", "Secret123")
        .await
        .expect("login");
    assert_eq!(user.full_name, "Aziz");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-4"));

    let sent: serde_json::Value = serde_json::from_str(&api.last_request().body).unwrap();
    assert_eq!(sent, json!({ "email": "reader@gazeta.uz", "password": "Secret123" }));

    // A fresh session on the same device picks the token back up.
    let mut next = Session::restore(api.client(), store);
    let user = next.bootstrap().await.expect("user");
    assert_eq!(user.id, 4);
    assert_eq!(
        api.last_request().authorization.as_deref(),
        Some("Bearer jwt-4")
    );
}

#[tokio::test]
async fn test_register_sends_trimmed_fields() {
    let api = MockApi::start(vec![route(
        "POST",
        "/api/auth/register",
        201,
        json!({ "user": user_json(5, "Dilnoza"), "access_token": "jwt-5" }),
    )])
    .await;
    let mut session = Session::restore(api.client(), Arc::new(MemoryStore::new()));

    session
        .register(" Dilnoza ", "d@gazeta.uz", "Secret123")
        .await
        .expect("register");
    assert!(session.is_authenticated());

    let sent: serde_json::Value = serde_json::from_str(&api.last_request().body).unwrap();
    assert_eq!(
        sent,
        json!({ "fullName": "Dilnoza", "email": "d@gazeta.uz", "password": "Secret123" })
    );
}

#[tokio::test]
async fn test_bootstrap_with_rejected_token_signs_out() {
    let api = MockApi::start(vec![route(
        "GET",
        "/api/auth/profile",
        401,
        json!({ "message": "Unauthorized" }),
    )])
    .await;
    let store = Arc::new(MemoryStore::new());
    store.set(TOKEN_KEY, "stale").unwrap();

    let mut session = Session::restore(api.client(), store.clone());
    assert!(session.is_authenticated());
    assert!(session.bootstrap().await.is_none());
    assert!(!session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn test_bootstrap_without_token_skips_request() {
    let api = MockApi::start(vec![]).await;
    let mut session = Session::restore(api.client(), Arc::new(MemoryStore::new()));
    assert!(session.bootstrap().await.is_none());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_update_profile_accepts_wrapped_user() {
    let api = MockApi::start(vec![
        route(
            "POST",
            "/api/auth/login",
            200,
            json!({ "user": user_json(4, "Aziz"), "access_token": "jwt-4" }),
        ),
        route(
            "PATCH",
            "/api/auth/profile",
            200,
            json!({ "user": user_json(4, "Aziz Karimov") }),
        ),
    ])
    .await;
    let mut session = Session::restore(api.client(), Arc::new(MemoryStore::new()));
    session.login("a@gazeta.uz", "pw").await.expect("login");

    let update = ProfileUpdate::from_form("Aziz Karimov", " ", "");
    let user = session.update_profile(&update).await.expect("update");
    assert_eq!(user.full_name, "Aziz Karimov");

    let req = api.last_request();
    assert_eq!(req.method, "PATCH");
    let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(sent, json!({ "fullName": "Aziz Karimov" }));
}

#[tokio::test]
async fn test_update_profile_unauthorized_clears_session() {
    let api = MockApi::start(vec![route(
        "PATCH",
        "/api/auth/profile",
        401,
        json!({ "message": "Unauthorized" }),
    )])
    .await;
    let store = Arc::new(MemoryStore::new());
    store.set(TOKEN_KEY, "stale").unwrap();
    let mut session = Session::restore(api.client(), store.clone());

    let err = session
        .update_profile(&ProfileUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert_eq!(store.get(TOKEN_KEY), None);
}
