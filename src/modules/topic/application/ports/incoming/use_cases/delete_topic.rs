use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Not allowed to delete this topic")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Owner or admin only. The topic's category aggregate is re-derived after
/// the delete commits.
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, topic_id: Uuid) -> Result<(), DeleteTopicError>;
}
