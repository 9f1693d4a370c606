//! Todo API integration tests
//!
//! Tests for the session-protected /todos endpoints.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, request, send, sign_up_and_in, test_app, token_issued_at};
use todogate::backend::auth::sessions::token_ttl;
use todogate::backend::auth::TokenCodec;

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_and_list() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;

    for title in ["A", "B", "C"] {
        let response = send(
            &app,
            request(Method::POST, "/todos", Some(json!({ "title": title })), Some(&token)),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body["title"], title);
        assert_eq!(response.body["completed"], false);
    }

    let response = send(&app, request(Method::GET, "/todos", None, Some(&token))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![1, 2, 3]);
    assert_eq!(response.body[1]["title"], "B");
}

#[tokio::test]
async fn test_create_overrides_id_and_timestamp() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;

    let before = Utc::now();
    let response = send(
        &app,
        request(
            Method::POST,
            "/todos",
            Some(json!({
                "id": 50,
                "title": "A",
                "completed": true,
                "created_at": "2000-01-01T00:00:00Z"
            })),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["completed"], true);

    let created_at: chrono::DateTime<Utc> =
        serde_json::from_value(response.body["created_at"].clone()).unwrap();
    assert!(created_at >= before - Duration::seconds(1));
}

#[tokio::test]
async fn test_list_empty_for_new_user() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;

    let response = send(&app, request(Method::GET, "/todos", None, Some(&token))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_bearer_header_is_accepted() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/todos")
        .header(header::AUTHORIZATION, auth_header(&token))
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_and_not_found() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;
    send(&app, request(Method::POST, "/todos", Some(json!({ "title": "A" })), Some(&token))).await;

    let replacement = json!({
        "id": 1,
        "title": "A, done",
        "completed": true,
        "created_at": "2024-05-01T12:00:00Z"
    });
    let response = send(
        &app,
        request(Method::PUT, "/todos/1", Some(replacement.clone()), Some(&token)),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, replacement);

    let listed = send(&app, request(Method::GET, "/todos", None, Some(&token))).await;
    assert_eq!(listed.body, json!([replacement]));

    let missing = send(
        &app,
        request(Method::PUT, "/todos/999", Some(json!({ "title": "x" })), Some(&token)),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "Todo not found");

    let garbage_id = send(
        &app,
        request(Method::PUT, "/todos/abc", Some(json!({ "title": "x" })), Some(&token)),
    )
    .await;
    assert_eq!(garbage_id.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_create_reuses_length_based_id() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;
    for title in ["A", "B", "C"] {
        send(&app, request(Method::POST, "/todos", Some(json!({ "title": title })), Some(&token))).await;
    }

    let response = send(&app, request(Method::DELETE, "/todos/2", None, Some(&token))).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let again = send(&app, request(Method::DELETE, "/todos/2", None, Some(&token))).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let created = send(&app, request(Method::POST, "/todos", Some(json!({ "title": "D" })), Some(&token))).await;
    assert_eq!(created.body["id"], 3);

    let listed = send(&app, request(Method::GET, "/todos", None, Some(&token))).await;
    assert_eq!(ids(&listed.body), vec![1, 3, 3]);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let (app, _) = test_app();
    let alice = sign_up_and_in(&app, "alice", "pw1").await;
    let bob = sign_up_and_in(&app, "bob", "pw2").await;

    send(&app, request(Method::POST, "/todos", Some(json!({ "title": "secret" })), Some(&alice))).await;

    let bob_list = send(&app, request(Method::GET, "/todos", None, Some(&bob))).await;
    assert_eq!(bob_list.body, json!([]));

    let bob_delete = send(&app, request(Method::DELETE, "/todos/1", None, Some(&bob))).await;
    assert_eq!(bob_delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_no_session_is_unauthorized_and_touches_nothing() {
    let (app, state) = test_app();

    let list = send(&app, request(Method::GET, "/todos", None, None)).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
    assert_eq!(list.body["error"], "Unauthorized");

    let create = send(&app, request(Method::POST, "/todos", Some(json!({ "title": "A" })), None)).await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);

    // Session is checked before the body is decoded
    let request = Request::builder()
        .method(Method::POST)
        .uri("/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{broken"))
        .unwrap();
    let broken = send(&app, request).await;
    assert_eq!(broken.status, StatusCode::UNAUTHORIZED);

    assert!(state.store.list_todos("").await.is_empty());
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let (app, state) = test_app();
    let expired = token_issued_at("alice", Utc::now() - token_ttl() - Duration::seconds(1));

    let response = send(&app, request(Method::POST, "/todos", Some(json!({ "title": "A" })), Some(&expired))).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(state.store.list_todos("alice").await.is_empty());
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let (app, _) = test_app();
    let forged = TokenCodec::new(b"not-the-server-secret")
        .issue("alice", Utc::now())
        .unwrap()
        .value;

    let response = send(&app, request(Method::GET, "/todos", None, Some(&forged))).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbled_token_is_bad_request() {
    let (app, _) = test_app();

    let response = send(&app, request(Method::GET, "/todos", None, Some("garbled"))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad request");
}

#[tokio::test]
async fn test_unreadable_cookie_is_bad_request() {
    let (app, _) = test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/todos")
        .header(header::COOKIE, HeaderValue::from_bytes(b"token=\xe9").unwrap())
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreadable_other_cookie_does_not_block_session() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;

    let mut cookie = b"theme=\xe9; token=".to_vec();
    cookie.extend_from_slice(token.as_bytes());
    let request = Request::builder()
        .method(Method::GET)
        .uri("/todos")
        .header(header::COOKIE, HeaderValue::from_bytes(&cookie).unwrap())
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_body_with_valid_session() {
    let (app, _) = test_app();
    let token = sign_up_and_in(&app, "alice", "pw1").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("token={}", token))
        .body(Body::from(r#"{"title": 5}"#))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid request payload");
}
