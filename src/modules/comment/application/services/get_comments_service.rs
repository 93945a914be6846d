use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::ports::{
        incoming::use_cases::{GetCommentsError, GetCommentsUseCase},
        outgoing::{CommentQuery, CommentResult},
    },
    shared::db::parse_id,
};

#[derive(Clone)]
pub struct GetCommentsService<Q>
where
    Q: CommentQuery,
{
    query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn by_topic(
        &self,
        topic_id: &str,
        offset: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommentResult>, GetCommentsError> {
        let Some(topic_id) = parse_id(topic_id) else {
            return Ok(Vec::new());
        };

        self.query
            .comments_by_topic(topic_id, offset.unwrap_or_else(Utc::now))
            .await
            .map_err(|e| GetCommentsError::QueryFailed(e.to_string()))
    }

    async fn by_user(
        &self,
        user_id: &str,
        offset: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommentResult>, GetCommentsError> {
        let Some(user_id) = parse_id(user_id) else {
            return Ok(Vec::new());
        };

        self.query
            .comments_by_user(UserId::from(user_id), offset.unwrap_or_else(Utc::now))
            .await
            .map_err(|e| GetCommentsError::QueryFailed(e.to_string()))
    }
}
