use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::db::{count_rows, run_in_transaction};
use crate::topic::application::{
    domain::entities::{toggle, TopicAction, TopicUserRelation},
    ports::outgoing::{TopicResult, TopicUserRepository, TopicUserRepositoryError},
};

use super::sea_orm_entity::{topic_users, topics};

#[derive(Debug, Clone)]
pub struct TopicUserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicUserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn flagged_count_sql(action: TopicAction) -> &'static str {
    match action {
        TopicAction::Liked => {
            "SELECT count(*) AS count FROM topic_users WHERE topic_id = $1 AND liked_at IS NOT NULL"
        }
        TopicAction::Bookmarked => {
            "SELECT count(*) AS count FROM topic_users WHERE topic_id = $1 AND bookmarked_at IS NOT NULL"
        }
    }
}

fn offset(at: Option<DateTime<Utc>>) -> Option<DateTime<FixedOffset>> {
    at.map(|t| t.fixed_offset())
}

fn new_relation_row(relation: &TopicUserRelation) -> topic_users::ActiveModel {
    topic_users::ActiveModel {
        topic_id: Set(relation.topic_id),
        user_id: Set(relation.user_id.value()),
        liked_at: Set(offset(relation.liked_at)),
        bookmarked_at: Set(offset(relation.bookmarked_at)),
        created_at: Set(relation.created_at.fixed_offset()),
        updated_at: Set(relation.updated_at.fixed_offset()),
    }
}

#[async_trait]
impl TopicUserRepository for TopicUserRepositoryPostgres {
    async fn apply_action(
        &self,
        topic_id: Uuid,
        user_id: UserId,
        action: TopicAction,
        state: bool,
    ) -> Result<TopicResult, TopicUserRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let topic = topics::Entity::find_by_id(topic_id)
                    .one(txn)
                    .await?
                    .ok_or(TopicUserRepositoryError::TopicNotFound)?;

                let existing = topic_users::Entity::find_by_id((topic_id, user_id.value()))
                    .one(txn)
                    .await?;

                // Taken before the relation row is written.
                let pre_count =
                    count_rows(txn, flagged_count_sql(action), vec![topic_id.into()]).await?;

                let outcome = toggle(
                    existing.as_ref().map(|m| m.to_relation()),
                    topic_id,
                    user_id,
                    action,
                    state,
                    pre_count,
                    Utc::now(),
                );

                let mut topic_row: topics::ActiveModel = topic.into();
                match action {
                    TopicAction::Liked => topic_row.likes_count = Set(outcome.count),
                    TopicAction::Bookmarked => topic_row.bookmarks_count = Set(outcome.count),
                }
                let topic = topic_row.update(txn).await?;

                let relation = match existing {
                    None => new_relation_row(&outcome.relation).insert(txn).await?,
                    Some(row) => {
                        let mut active: topic_users::ActiveModel = row.into();
                        match action {
                            TopicAction::Liked => {
                                active.liked_at = Set(offset(outcome.relation.liked_at))
                            }
                            TopicAction::Bookmarked => {
                                active.bookmarked_at = Set(offset(outcome.relation.bookmarked_at))
                            }
                        }
                        active.updated_at = Set(outcome.relation.updated_at.fixed_offset());
                        active.update(txn).await?
                    }
                };

                tracing::debug!(
                    topic_id = %topic_id,
                    user_id = %user_id,
                    action = action.as_str(),
                    state,
                    count = outcome.count,
                    "topic action applied"
                );

                Ok(topic.to_topic_result(Some(&relation)))
            })
        })
        .await
    }
}
