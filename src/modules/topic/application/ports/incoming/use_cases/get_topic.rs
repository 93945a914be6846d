use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, topic::application::ports::outgoing::TopicResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: &str,
        viewer: Option<UserId>,
    ) -> Result<Option<TopicResult>, GetTopicError>;
}
