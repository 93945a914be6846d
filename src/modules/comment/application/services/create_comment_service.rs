use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    comment::application::ports::{
        incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
        outgoing::{CommentRepository, CommentRepositoryError, CommentResult, CreateCommentData},
    },
    statistic::application::{
        domain::entities::StatisticKind, ports::incoming::use_cases::RecordStatisticUseCase,
    },
};

#[derive(Clone)]
pub struct CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    repository: R,
    statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
}

impl<R> CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(repository: R, statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            statistics,
        }
    }
}

#[async_trait]
impl<R> CreateCommentUseCase for CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        let data = CreateCommentData {
            topic_id: command.topic_id(),
            author: command.author(),
            body: command.body().to_string(),
        };

        let comment = self
            .repository
            .create_comment(data)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::TopicNotFound => CreateCommentError::TopicNotFound,
                other => CreateCommentError::TransactionError(other.to_string()),
            })?;

        self.statistics.record(StatisticKind::Comments);

        Ok(comment)
    }
}
