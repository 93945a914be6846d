use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Actor,
    comment::application::{
        domain::entities::{normalize_body, CommentBodyError},
        ports::outgoing::CommentResult,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    comment_id: Uuid,
    body: String,
}

impl UpdateCommentCommand {
    pub fn new(comment_id: Uuid, body: &str) -> Result<Self, CommentBodyError> {
        Ok(Self {
            comment_id,
            body: normalize_body(body)?,
        })
    }

    pub fn comment_id(&self) -> Uuid {
        self.comment_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Not allowed to edit this comment")]
    Forbidden,

    #[error("Transaction failed: {0}")]
    TransactionError(String),
}

/// Owner or admin only.
#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError>;
}
