use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Actor,
    topic::application::ports::{
        incoming::use_cases::{RecomputeTopicCountersError, RecomputeTopicCountersUseCase},
        outgoing::{TopicRepository, TopicRepositoryError, TopicResult},
    },
};

#[derive(Debug, Clone)]
pub struct RecomputeTopicCountersService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> RecomputeTopicCountersService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecomputeTopicCountersUseCase for RecomputeTopicCountersService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        topic_id: Uuid,
    ) -> Result<TopicResult, RecomputeTopicCountersError> {
        if !actor.is_admin() {
            return Err(RecomputeTopicCountersError::Forbidden);
        }

        let topic = self
            .repository
            .recompute_counters(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => RecomputeTopicCountersError::TopicNotFound,
                other => RecomputeTopicCountersError::TransactionError(other.to_string()),
            })?;

        tracing::info!(
            topic_id = %topic.id,
            comments = topic.comments_count,
            likes = topic.likes_count,
            bookmarks = topic.bookmarks_count,
            "topic counters recomputed"
        );

        Ok(topic)
    }
}
