use async_trait::async_trait;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::domain::entities::TopicAction,
};

use super::TopicResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicUserRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DbErr> for TopicUserRepositoryError {
    fn from(e: DbErr) -> Self {
        TopicUserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
pub trait TopicUserRepository: Send + Sync {
    /// Sets or clears one flag on the (topic, user) relation and rewrites the
    /// matching topic counter in the same transaction.
    async fn apply_action(
        &self,
        topic_id: Uuid,
        user_id: UserId,
        action: TopicAction,
        state: bool,
    ) -> Result<TopicResult, TopicUserRepositoryError>;
}
