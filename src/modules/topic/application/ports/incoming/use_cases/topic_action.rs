use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Actor,
    topic::application::{
        domain::entities::{TopicAction, UnknownTopicAction},
        ports::outgoing::TopicResult,
    },
};

#[derive(Debug, Clone)]
pub struct TopicActionCommand {
    topic_id: Uuid,
    action: TopicAction,
    state: bool,
}

impl TopicActionCommand {
    /// Fails for anything other than `liked` or `bookmarked`.
    pub fn new(topic_id: Uuid, action: &str, state: bool) -> Result<Self, UnknownTopicAction> {
        Ok(Self {
            topic_id,
            action: action.parse()?,
            state,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn action(&self) -> TopicAction {
        self.action
    }

    pub fn state(&self) -> bool {
        self.state
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicActionError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

/// Any authenticated actor may like or bookmark any topic.
#[async_trait]
pub trait TopicActionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        command: TopicActionCommand,
    ) -> Result<TopicResult, TopicActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_command_for_known_action() {
        let cmd = TopicActionCommand::new(Uuid::new_v4(), "bookmarked", false).unwrap();
        assert_eq!(cmd.action(), TopicAction::Bookmarked);
        assert!(!cmd.state());
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(TopicActionCommand::new(Uuid::new_v4(), "like", true).is_err());
    }
}
