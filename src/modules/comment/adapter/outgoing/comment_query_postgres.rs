use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::{
    domain::entities::COMMENTS_PAGE_SIZE,
    ports::outgoing::{CommentQuery, CommentQueryError, CommentResult},
};
use crate::shared::db::parse_id;

use super::sea_orm_entity::{Column, Entity as CommentEntity, Model as CommentModel};

#[derive(Debug, Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_results(rows: Vec<CommentModel>) -> Vec<CommentResult> {
    rows.iter().map(CommentModel::to_comment_result).collect()
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_comment(&self, id: &str) -> Result<Option<CommentResult>, CommentQueryError> {
        let Some(comment_id) = parse_id(id) else {
            return Ok(None);
        };

        let comment = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(comment.map(|c| c.to_comment_result()))
    }

    async fn comments_by_topic(
        &self,
        topic_id: Uuid,
        offset: DateTime<Utc>,
    ) -> Result<Vec<CommentResult>, CommentQueryError> {
        let rows = CommentEntity::find()
            .filter(Column::TopicId.eq(topic_id))
            .filter(Column::CreatedAt.lt(offset.fixed_offset()))
            .order_by_asc(Column::CreatedAt)
            .limit(COMMENTS_PAGE_SIZE)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(to_results(rows))
    }

    async fn comments_by_user(
        &self,
        user_id: UserId,
        offset: DateTime<Utc>,
    ) -> Result<Vec<CommentResult>, CommentQueryError> {
        let rows = CommentEntity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::CreatedAt.lt(offset.fixed_offset()))
            .order_by_desc(Column::CreatedAt)
            .limit(COMMENTS_PAGE_SIZE)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(to_results(rows))
    }
}
