use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::application::domain::{entities::Actor, permission::is_permit},
    comment::application::ports::{
        incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
        outgoing::{CommentQuery, CommentRepository, CommentRepositoryError},
    },
    statistic::application::{
        domain::entities::StatisticKind, ports::incoming::use_cases::RecordStatisticUseCase,
    },
};

#[derive(Clone)]
pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
    statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            statistics,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, comment_id: Uuid) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_comment(&comment_id.to_string())
            .await
            .map_err(|e| DeleteCommentError::TransactionError(e.to_string()))?
            .ok_or(DeleteCommentError::CommentNotFound)?;

        if !is_permit(comment.user_id, Some(&actor)) {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(&comment)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => DeleteCommentError::CommentNotFound,
                CommentRepositoryError::BadData | CommentRepositoryError::TopicNotFound => {
                    DeleteCommentError::BadData
                }
                other => DeleteCommentError::TransactionError(other.to_string()),
            })?;

        self.statistics.record(StatisticKind::Comments);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        auth::application::domain::entities::UserId,
        comment::application::services::test_support::{
            sample_comment, MockCommentQuery, MockCommentRepository,
        },
        topic::application::services::test_support::RecordingStatistics,
    };

    #[tokio::test]
    async fn owner_deletes_and_statistic_is_recorded() {
        let owner = Uuid::new_v4();
        let comment = sample_comment(UserId::from(owner), Uuid::new_v4());
        let statistics = Arc::new(RecordingStatistics::default());
        let service = DeleteCommentService::new(
            MockCommentQuery::holding(comment.clone()),
            MockCommentRepository::default(),
            statistics.clone(),
        );

        service.execute(Actor::member(owner), comment.id).await.unwrap();

        assert_eq!(service.repository.deleted.lock().unwrap().as_slice(), &[comment.id]);
        assert_eq!(
            statistics.recorded.lock().unwrap().as_slice(),
            &[StatisticKind::Comments]
        );
    }

    #[tokio::test]
    async fn stranger_is_forbidden() {
        let comment = sample_comment(UserId::from(Uuid::new_v4()), Uuid::new_v4());
        let statistics = Arc::new(RecordingStatistics::default());
        let service = DeleteCommentService::new(
            MockCommentQuery::holding(comment.clone()),
            MockCommentRepository::default(),
            statistics.clone(),
        );

        let result = service.execute(Actor::member(Uuid::new_v4()), comment.id).await;

        assert!(matches!(result, Err(DeleteCommentError::Forbidden)));
        assert!(service.repository.deleted.lock().unwrap().is_empty());
        assert!(statistics.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_comment() {
        let service = DeleteCommentService::new(
            MockCommentQuery::default(),
            MockCommentRepository::default(),
            Arc::new(RecordingStatistics::default()),
        );

        let result = service
            .execute(Actor::admin(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DeleteCommentError::CommentNotFound)));
    }

    #[tokio::test]
    async fn orphaned_comment_is_bad_data() {
        let comment = sample_comment(UserId::from(Uuid::new_v4()), Uuid::new_v4());
        let service = DeleteCommentService::new(
            MockCommentQuery::holding(comment.clone()),
            MockCommentRepository::failing(CommentRepositoryError::BadData),
            Arc::new(RecordingStatistics::default()),
        );

        let result = service.execute(Actor::admin(Uuid::new_v4()), comment.id).await;

        assert!(matches!(result, Err(DeleteCommentError::BadData)));
    }
}
