use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::adapter::outgoing::sea_orm_entity as categories;
use crate::shared::db::{count_rows, run_in_transaction};
use crate::topic::application::{
    domain::entities::TopicCounters,
    ports::outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult},
};

use super::sea_orm_entity::topics::{ActiveModel as TopicActiveModel, Entity as TopicEntity};

const COUNT_COMMENTS: &str = "SELECT count(*) AS count FROM comments WHERE topic_id = $1";
const COUNT_LIKES: &str =
    "SELECT count(*) AS count FROM topic_users WHERE topic_id = $1 AND liked_at IS NOT NULL";
const COUNT_BOOKMARKS: &str =
    "SELECT count(*) AS count FROM topic_users WHERE topic_id = $1 AND bookmarked_at IS NOT NULL";

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                categories::Entity::find_by_id(data.category_id)
                    .one(txn)
                    .await?
                    .ok_or(TopicRepositoryError::CategoryNotFound)?;

                let now = Utc::now().fixed_offset();
                let active = TopicActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(data.title),
                    body: Set(data.body),
                    category_id: Set(data.category_id),
                    user_id: Set(data.author.into()),
                    comments_count: Set(0),
                    likes_count: Set(0),
                    bookmarks_count: Set(0),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let inserted = active.insert(txn).await?;
                Ok(inserted.to_topic_result(None))
            })
        })
        .await
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<TopicResult, TopicRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let topic = TopicEntity::find_by_id(topic_id)
                    .one(txn)
                    .await?
                    .ok_or(TopicRepositoryError::TopicNotFound)?;

                TopicEntity::delete_by_id(topic_id).exec(txn).await?;

                Ok(topic.to_topic_result(None))
            })
        })
        .await
    }

    async fn recompute_counters(
        &self,
        topic_id: Uuid,
    ) -> Result<TopicResult, TopicRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let topic = TopicEntity::find_by_id(topic_id)
                    .one(txn)
                    .await?
                    .ok_or(TopicRepositoryError::TopicNotFound)?;

                let counters = TopicCounters {
                    comments_count: count_rows(txn, COUNT_COMMENTS, vec![topic_id.into()]).await?,
                    likes_count: count_rows(txn, COUNT_LIKES, vec![topic_id.into()]).await?,
                    bookmarks_count: count_rows(txn, COUNT_BOOKMARKS, vec![topic_id.into()])
                        .await?,
                };

                let mut active: TopicActiveModel = topic.into();
                active.comments_count = Set(counters.comments_count);
                active.likes_count = Set(counters.likes_count);
                active.bookmarks_count = Set(counters.bookmarks_count);

                let updated = active.update(txn).await?;
                Ok(updated.to_topic_result(None))
            })
        })
        .await
    }
}
