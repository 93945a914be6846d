use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub author: UserId,
    pub category_id: Uuid,
    pub title: String,
    pub body: String,
}

/// Topic as returned to callers. The two `is_*_by` flags describe the viewer
/// the topic was read for and are `false` for anonymous reads.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TopicResult {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
    #[schema(value_type = Uuid)]
    pub user_id: UserId,
    pub comments_count: i64,
    pub likes_count: i64,
    pub bookmarks_count: i64,
    pub is_liked_by: bool,
    pub is_bookmarked_by: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DbErr> for TopicRepositoryError {
    fn from(e: DbErr) -> Self {
        TopicRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;

    /// Comments and relation rows go with the topic through the foreign
    /// key cascade. Returns the topic as it was before deletion.
    async fn delete_topic(&self, topic_id: Uuid) -> Result<TopicResult, TopicRepositoryError>;

    /// Rewrites all three topic counters from the comment and relation rows.
    async fn recompute_counters(&self, topic_id: Uuid)
        -> Result<TopicResult, TopicRepositoryError>;
}
