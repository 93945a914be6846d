use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Not allowed to delete this comment")]
    Forbidden,

    #[error("Comment references a missing topic")]
    BadData,

    #[error("Transaction failed: {0}")]
    TransactionError(String),
}

/// Owner or admin only.
#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, comment_id: Uuid) -> Result<(), DeleteCommentError>;
}
