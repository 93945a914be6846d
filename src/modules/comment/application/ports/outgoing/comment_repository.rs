use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub topic_id: Uuid,
    pub author: UserId,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentResult {
    pub id: Uuid,
    pub body: String,
    pub topic_id: Uuid,
    #[schema(value_type = Uuid)]
    pub user_id: UserId,
    pub score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    /// The comment exists but its topic does not.
    #[error("Comment references a missing topic")]
    BadData,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DbErr> for CommentRepositoryError {
    fn from(e: DbErr) -> Self {
        CommentRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts the comment and rewrites the topic's `comments_count` in one
    /// transaction.
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError>;

    async fn update_comment_body(
        &self,
        comment_id: Uuid,
        body: String,
    ) -> Result<CommentResult, CommentRepositoryError>;

    /// Deletes the comment and rewrites its topic's `comments_count` in one
    /// transaction.
    async fn delete_comment(&self, comment: &CommentResult) -> Result<(), CommentRepositoryError>;
}
