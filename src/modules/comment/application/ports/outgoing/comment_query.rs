use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::CommentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Malformed ids resolve to `Ok(None)`.
    async fn find_comment(&self, id: &str) -> Result<Option<CommentResult>, CommentQueryError>;

    /// Oldest first, strictly before `offset`.
    async fn comments_by_topic(
        &self,
        topic_id: Uuid,
        offset: DateTime<Utc>,
    ) -> Result<Vec<CommentResult>, CommentQueryError>;

    /// Newest first, strictly before `offset`.
    async fn comments_by_user(
        &self,
        user_id: UserId,
        offset: DateTime<Utc>,
    ) -> Result<Vec<CommentResult>, CommentQueryError>;
}
