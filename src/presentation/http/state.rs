use crate::{
    application::{
        comment_likes::use_case::ToggleCommentLikeUseCase, comments::use_case::CommentUseCase,
        replies::use_case::ReplyUseCase, threads::use_case::ThreadUseCase,
    },
    config::Config,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub threads: Arc<ThreadUseCase>,
    pub comments: Arc<CommentUseCase>,
    pub replies: Arc<ReplyUseCase>,
    pub toggle_comment_like: Arc<ToggleCommentLikeUseCase>,
}
