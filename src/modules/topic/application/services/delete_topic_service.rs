use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::application::domain::{entities::Actor, permission::is_permit},
    category::application::ports::incoming::use_cases::EmitCategoryUseCase,
    statistic::application::{
        domain::entities::StatisticKind, ports::incoming::use_cases::RecordStatisticUseCase,
    },
    topic::application::ports::{
        incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
        outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
};

#[derive(Clone)]
pub struct DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
    emit_category: Arc<dyn EmitCategoryUseCase + Send + Sync>,
    statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
}

impl<Q, R> DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        emit_category: Arc<dyn EmitCategoryUseCase + Send + Sync>,
        statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            emit_category,
            statistics,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteTopicUseCase for DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, topic_id: Uuid) -> Result<(), DeleteTopicError> {
        let topic = self
            .query
            .find_topic(&topic_id.to_string(), None)
            .await
            .map_err(|e| DeleteTopicError::DatabaseError(e.to_string()))?
            .ok_or(DeleteTopicError::TopicNotFound)?;

        if !is_permit(topic.user_id, Some(&actor)) {
            return Err(DeleteTopicError::Forbidden);
        }

        let deleted = self
            .repository
            .delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                other => DeleteTopicError::DatabaseError(other.to_string()),
            })?;

        if let Err(e) = self.emit_category.execute(deleted.category_id).await {
            tracing::error!(
                topic_id = %topic_id,
                category_id = %deleted.category_id,
                error = %e,
                "failed to refresh category after topic deletion"
            );
        }

        self.statistics.record(StatisticKind::Topics);
        self.statistics.record(StatisticKind::Comments);

        Ok(())
    }
}
