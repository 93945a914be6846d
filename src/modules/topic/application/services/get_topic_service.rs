use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::{
        incoming::use_cases::{GetTopicError, GetTopicUseCase},
        outgoing::{TopicQuery, TopicResult},
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> GetTopicService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicUseCase for GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: &str,
        viewer: Option<UserId>,
    ) -> Result<Option<TopicResult>, GetTopicError> {
        self.query
            .find_topic(topic_id, viewer)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))
    }
}
