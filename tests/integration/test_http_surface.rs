use super::helpers::{expect_status, read_json, send, spawn_app, user_token};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn put_comment_like_without_token_is_unauthorized() {
    let app = spawn_app();
    let req = Request::builder()
        .method("PUT")
        .uri(format!(
            "/threads/{}/comments/{}/likes",
            Uuid::now_v7(),
            Uuid::now_v7()
        ))
        .body(Body::empty())
        .unwrap();

    let res = expect_status(send(&app, req).await, StatusCode::UNAUTHORIZED);
    let body = read_json(res).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Missing authentication");
}

#[tokio::test]
async fn put_comment_like_with_invalid_token_is_unauthorized() {
    let app = spawn_app();
    let req = Request::builder()
        .method("PUT")
        .uri(format!(
            "/threads/{}/comments/{}/likes",
            Uuid::now_v7(),
            Uuid::now_v7()
        ))
        .header(header::AUTHORIZATION, "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();

    expect_status(send(&app, req).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn put_comment_like_with_malformed_ids_is_rejected() {
    let app = spawn_app();
    let req = Request::builder()
        .method("PUT")
        .uri("/threads/not-a-uuid/comments/also-not-a-uuid/likes")
        .header(header::AUTHORIZATION, format!("Bearer {}", user_token()))
        .body(Body::empty())
        .unwrap();

    expect_status(send(&app, req).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_thread_without_token_is_unauthorized() {
    let app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/threads")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "title": "a thread", "body": "its body" }).to_string(),
        ))
        .unwrap();

    let res = expect_status(send(&app, req).await, StatusCode::UNAUTHORIZED);
    let body = read_json(res).await;
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn post_comment_with_empty_content_is_rejected() {
    let app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri(format!("/threads/{}/comments", Uuid::now_v7()))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", user_token()))
        .body(Body::from(json!({ "content": "   " }).to_string()))
        .unwrap();

    let res = expect_status(send(&app, req).await, StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Comment cannot be empty");
}

#[tokio::test]
async fn post_reply_with_oversized_content_is_rejected() {
    let app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri(format!(
            "/threads/{}/comments/{}/replies",
            Uuid::now_v7(),
            Uuid::now_v7()
        ))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", user_token()))
        .body(Body::from(json!({ "content": "x".repeat(501) }).to_string()))
        .unwrap();

    let res = expect_status(send(&app, req).await, StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["message"], "Reply must be 500 characters or less");
}

#[tokio::test]
async fn register_with_short_password_is_rejected() {
    let app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "username": "newuser",
                "password": "short",
                "fullname": "New User"
            })
            .to_string(),
        ))
        .unwrap();

    let res = expect_status(send(&app, req).await, StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Password must be at least 8 characters");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": "", "password": "longenough", "fullname": "x" }).to_string(),
        ))
        .unwrap();

    let res = send(&app, req).await;
    assert!(res.headers().contains_key("x-request-id"));
}
