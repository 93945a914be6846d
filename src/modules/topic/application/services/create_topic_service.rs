use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    category::application::ports::incoming::use_cases::EmitCategoryUseCase,
    statistic::application::{
        domain::entities::StatisticKind, ports::incoming::use_cases::RecordStatisticUseCase,
    },
    topic::application::ports::{
        incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
        outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult},
    },
};

#[derive(Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
    emit_category: Arc<dyn EmitCategoryUseCase + Send + Sync>,
    statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        emit_category: Arc<dyn EmitCategoryUseCase + Send + Sync>,
        statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            emit_category,
            statistics,
        }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError> {
        let data = CreateTopicData {
            author: command.author(),
            category_id: command.category_id(),
            title: command.title().to_string(),
            body: command.body().to_string(),
        };

        let topic = self
            .repository
            .create_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::CategoryNotFound => CreateTopicError::CategoryNotFound,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })?;

        // The topic is committed; a failed emit leaves the category stale
        // until the next emit for it.
        if let Err(e) = self.emit_category.execute(topic.category_id).await {
            tracing::error!(
                topic_id = %topic.id,
                category_id = %topic.category_id,
                error = %e,
                "failed to refresh category after topic creation"
            );
        }

        self.statistics.record(StatisticKind::Topics);

        Ok(topic)
    }
}
