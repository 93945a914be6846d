use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

use super::TopicResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Malformed ids resolve to `Ok(None)`. With a viewer the relation flags
    /// are filled from that user's relation row.
    async fn find_topic(
        &self,
        id: &str,
        viewer: Option<UserId>,
    ) -> Result<Option<TopicResult>, TopicQueryError>;
}
