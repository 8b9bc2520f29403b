use super::{
    handlers::{auth, comment_likes, comments, health, replies, threads},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Users & authentication
        .route("/users", post(auth::register))
        .route("/authentications", post(auth::login))
        // Threads
        .route("/threads", post(threads::post_thread))
        .route("/threads/{thread_id}", get(threads::get_thread))
        // Comments
        .route(
            "/threads/{thread_id}/comments",
            post(comments::post_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(comments::delete_comment),
        )
        // Comment likes
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(comment_likes::put_comment_like),
        )
        // Replies
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(replies::post_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(replies::delete_reply),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
