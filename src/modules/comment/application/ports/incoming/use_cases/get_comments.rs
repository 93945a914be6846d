use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::comment::application::ports::outgoing::CommentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Pages of at most thirty comments. A missing offset starts from now.
/// Malformed ids yield an empty page.
#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn by_topic(
        &self,
        topic_id: &str,
        offset: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommentResult>, GetCommentsError>;

    async fn by_user(
        &self,
        user_id: &str,
        offset: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommentResult>, GetCommentsError>;
}
