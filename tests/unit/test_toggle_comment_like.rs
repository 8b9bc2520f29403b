use async_trait::async_trait;
use forum_api::application::comment_likes::{
    dto::ToggleCommentLikeRequest, use_case::ToggleCommentLikeUseCase,
};
use forum_api::domain::{
    comment::{
        entity::{Comment, CommentView, NewComment},
        repository::CommentRepository,
    },
    errors::DomainError,
    thread::{
        entity::{NewThread, Thread, ThreadView},
        repository::ThreadRepository,
    },
};
use mockall::mock;
use mockall::predicate::eq;
use std::sync::Arc;
use uuid::Uuid;

mock! {
    pub ThreadRepo {}

    #[async_trait]
    impl ThreadRepository for ThreadRepo {
        async fn create(&self, thread: NewThread) -> Result<Thread, DomainError>;
        async fn verify_thread(&self, thread_id: Uuid) -> Result<(), DomainError>;
        async fn find_view(&self, thread_id: Uuid) -> Result<Option<ThreadView>, DomainError>;
    }
}

mock! {
    pub CommentRepo {}

    #[async_trait]
    impl CommentRepository for CommentRepo {
        async fn create(&self, comment: NewComment) -> Result<Comment, DomainError>;
        async fn soft_delete(&self, comment_id: Uuid) -> Result<(), DomainError>;
        async fn verify_owner(&self, comment_id: Uuid, user: Uuid) -> Result<(), DomainError>;
        async fn verify_comment_thread(
            &self,
            comment_id: Uuid,
            thread_id: Uuid,
        ) -> Result<(), DomainError>;
        async fn get_thread_comments(
            &self,
            thread_id: Uuid,
        ) -> Result<Vec<CommentView>, DomainError>;
        async fn has_liked(&self, comment_id: Uuid, owner: Uuid) -> Result<bool, DomainError>;
        async fn add_like(&self, comment_id: Uuid, owner: Uuid) -> Result<(), DomainError>;
        async fn remove_like(&self, comment_id: Uuid, owner: Uuid) -> Result<(), DomainError>;
    }
}

fn request() -> ToggleCommentLikeRequest {
    ToggleCommentLikeRequest {
        thread_id: Uuid::now_v7(),
        comment_id: Uuid::now_v7(),
        owner: Uuid::now_v7(),
    }
}

#[tokio::test]
async fn likes_comment_that_is_not_yet_liked() {
    let req = request();

    let mut threads = MockThreadRepo::new();
    threads
        .expect_verify_thread()
        .with(eq(req.thread_id))
        .times(1)
        .returning(|_| Ok(()));

    let mut comments = MockCommentRepo::new();
    comments
        .expect_verify_comment_thread()
        .with(eq(req.comment_id), eq(req.thread_id))
        .times(1)
        .returning(|_, _| Ok(()));
    comments
        .expect_has_liked()
        .with(eq(req.comment_id), eq(req.owner))
        .times(1)
        .returning(|_, _| Ok(false));
    comments
        .expect_add_like()
        .with(eq(req.comment_id), eq(req.owner))
        .times(1)
        .returning(|_, _| Ok(()));
    comments.expect_remove_like().times(0);

    let use_case = ToggleCommentLikeUseCase::new(Arc::new(threads), Arc::new(comments));
    let liked = use_case.execute(req).await.expect("toggle should succeed");
    assert!(liked, "first toggle must leave the comment liked");
}

#[tokio::test]
async fn unlikes_comment_that_is_already_liked() {
    let req = request();

    let mut threads = MockThreadRepo::new();
    threads
        .expect_verify_thread()
        .with(eq(req.thread_id))
        .times(1)
        .returning(|_| Ok(()));

    let mut comments = MockCommentRepo::new();
    comments
        .expect_verify_comment_thread()
        .with(eq(req.comment_id), eq(req.thread_id))
        .times(1)
        .returning(|_, _| Ok(()));
    comments
        .expect_has_liked()
        .with(eq(req.comment_id), eq(req.owner))
        .times(1)
        .returning(|_, _| Ok(true));
    comments
        .expect_remove_like()
        .with(eq(req.comment_id), eq(req.owner))
        .times(1)
        .returning(|_, _| Ok(()));
    comments.expect_add_like().times(0);

    let use_case = ToggleCommentLikeUseCase::new(Arc::new(threads), Arc::new(comments));
    let liked = use_case.execute(req).await.expect("toggle should succeed");
    assert!(!liked, "second toggle must remove the like");
}

#[tokio::test]
async fn fails_before_any_like_read_when_thread_is_missing() {
    let req = request();

    let mut threads = MockThreadRepo::new();
    threads
        .expect_verify_thread()
        .times(1)
        .returning(|_| Err(DomainError::NotFound("Thread not found".to_string())));

    let mut comments = MockCommentRepo::new();
    comments.expect_verify_comment_thread().times(0);
    comments.expect_has_liked().times(0);
    comments.expect_add_like().times(0);
    comments.expect_remove_like().times(0);

    let use_case = ToggleCommentLikeUseCase::new(Arc::new(threads), Arc::new(comments));
    let err = use_case.execute(req).await.unwrap_err();
    match err {
        DomainError::NotFound(msg) => assert_eq!(msg, "Thread not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn fails_when_comment_belongs_to_another_thread() {
    let req = request();

    let mut threads = MockThreadRepo::new();
    threads
        .expect_verify_thread()
        .times(1)
        .returning(|_| Ok(()));

    let mut comments = MockCommentRepo::new();
    comments
        .expect_verify_comment_thread()
        .with(eq(req.comment_id), eq(req.thread_id))
        .times(1)
        .returning(|_, _| {
            Err(DomainError::NotFound(
                "Comment not found in this thread!".to_string(),
            ))
        });
    comments.expect_has_liked().times(0);
    comments.expect_add_like().times(0);
    comments.expect_remove_like().times(0);

    let use_case = ToggleCommentLikeUseCase::new(Arc::new(threads), Arc::new(comments));
    let err = use_case.execute(req).await.unwrap_err();
    match err {
        DomainError::NotFound(msg) => assert_eq!(msg, "Comment not found in this thread!"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
