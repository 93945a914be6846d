use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::{normalize_body, CommentBodyError},
        ports::outgoing::CommentResult,
    },
};

//
// ──────────────────────────────────────────────────────────
// Create Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    topic_id: Uuid,
    author: UserId,
    body: String,
}

impl CreateCommentCommand {
    pub fn new(topic_id: Uuid, author: UserId, body: &str) -> Result<Self, CommentBodyError> {
        Ok(Self {
            topic_id,
            author,
            body: normalize_body(body)?,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Transaction failed: {0}")]
    TransactionError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError>;
}
