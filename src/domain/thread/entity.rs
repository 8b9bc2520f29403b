use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A top-level discussion topic. Threads are immutable once created; all
/// activity happens through their comments.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Thread {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Thread row joined with its author's username, as served on the read path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ThreadView {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: Uuid,
}
