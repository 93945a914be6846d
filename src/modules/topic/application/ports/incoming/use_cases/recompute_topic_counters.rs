use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Actor, topic::application::ports::outgoing::TopicResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecomputeTopicCountersError {
    #[error("Administrator role required")]
    Forbidden,

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

/// Repair path for counters that drifted through direct row manipulation.
#[async_trait]
pub trait RecomputeTopicCountersUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        topic_id: Uuid,
    ) -> Result<TopicResult, RecomputeTopicCountersError>;
}
