use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Actor,
    topic::application::ports::{
        incoming::use_cases::{TopicActionCommand, TopicActionError, TopicActionUseCase},
        outgoing::{TopicResult, TopicUserRepository, TopicUserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct TopicActionService<R>
where
    R: TopicUserRepository,
{
    repository: R,
}

impl<R> TopicActionService<R>
where
    R: TopicUserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TopicActionUseCase for TopicActionService<R>
where
    R: TopicUserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        command: TopicActionCommand,
    ) -> Result<TopicResult, TopicActionError> {
        self.repository
            .apply_action(
                command.topic_id(),
                actor.id,
                command.action(),
                command.state(),
            )
            .await
            .map_err(|e| match e {
                TopicUserRepositoryError::TopicNotFound => TopicActionError::TopicNotFound,
                TopicUserRepositoryError::DatabaseError(msg) => {
                    TopicActionError::TransactionError(msg)
                }
            })
    }
}
