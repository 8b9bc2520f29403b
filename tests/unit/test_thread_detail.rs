use chrono::{Duration, Utc};
use forum_api::application::threads::dto::CommentDetail;
use forum_api::domain::{
    comment::entity::{CommentView, DELETED_COMMENT_MARKER},
    reply::entity::{DELETED_REPLY_MARKER, ReplyView},
};
use uuid::Uuid;

fn comment(username: &str, content: &str, is_deleted: bool, like_count: i64) -> CommentView {
    CommentView {
        id: Uuid::now_v7(),
        username: username.to_string(),
        content: content.to_string(),
        is_deleted,
        like_count,
        created_at: Utc::now(),
    }
}

fn reply(comment_id: Uuid, username: &str, content: &str, is_deleted: bool) -> ReplyView {
    ReplyView {
        id: Uuid::now_v7(),
        comment_id,
        username: username.to_string(),
        content: content.to_string(),
        is_deleted,
        created_at: Utc::now(),
    }
}

#[test]
fn groups_replies_under_their_comment() {
    let first = comment("alice", "first", false, 2);
    let second = comment("bob", "second", false, 0);
    let replies = vec![
        reply(first.id, "bob", "to first", false),
        reply(second.id, "alice", "to second", false),
        reply(first.id, "carol", "also to first", false),
    ];

    let details = CommentDetail::assemble(vec![first.clone(), second.clone()], replies);

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].id, first.id);
    assert_eq!(details[0].replies.len(), 2);
    assert_eq!(details[1].replies.len(), 1);
    assert_eq!(details[1].replies[0].content, "to second");
    assert_eq!(details[0].like_count, 2);
}

#[test]
fn masks_soft_deleted_comment_content() {
    let deleted = comment("alice", "original text", true, 5);
    let details = CommentDetail::assemble(vec![deleted], vec![]);

    assert_eq!(details[0].content, DELETED_COMMENT_MARKER);
    // The row survives deletion: author and like count stay visible.
    assert_eq!(details[0].username, "alice");
    assert_eq!(details[0].like_count, 5);
}

#[test]
fn masks_soft_deleted_reply_content() {
    let parent = comment("alice", "hello", false, 0);
    let replies = vec![reply(parent.id, "bob", "rude text", true)];

    let details = CommentDetail::assemble(vec![parent], replies);

    assert_eq!(details[0].replies[0].content, DELETED_REPLY_MARKER);
    assert_eq!(details[0].replies[0].username, "bob");
}

#[test]
fn keeps_creation_order_of_comments_and_replies() {
    let older = comment("alice", "older", false, 0);
    let newer = CommentView {
        created_at: Utc::now() + Duration::seconds(10),
        ..comment("bob", "newer", false, 0)
    };

    let details = CommentDetail::assemble(vec![older.clone(), newer.clone()], vec![]);

    // Assembly does not reorder; rows arrive sorted from the repository.
    assert_eq!(details[0].content, "older");
    assert_eq!(details[1].content, "newer");
}
