use async_trait::async_trait;

use crate::{
    auth::application::domain::{entities::Actor, permission::is_permit},
    comment::application::ports::{
        incoming::use_cases::{UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase},
        outgoing::{CommentQuery, CommentRepository, CommentRepositoryError, CommentResult},
    },
};

#[derive(Clone)]
pub struct UpdateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateCommentUseCase for UpdateCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        let comment = self
            .query
            .find_comment(&command.comment_id().to_string())
            .await
            .map_err(|e| UpdateCommentError::TransactionError(e.to_string()))?
            .ok_or(UpdateCommentError::CommentNotFound)?;

        if !is_permit(comment.user_id, Some(&actor)) {
            return Err(UpdateCommentError::Forbidden);
        }

        self.repository
            .update_comment_body(comment.id, command.body().to_string())
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => UpdateCommentError::CommentNotFound,
                other => UpdateCommentError::TransactionError(other.to_string()),
            })
    }
}
