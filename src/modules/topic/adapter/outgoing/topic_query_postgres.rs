use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::shared::db::parse_id;
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError, TopicResult};

use super::sea_orm_entity::{topic_users, topics};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn find_topic(
        &self,
        id: &str,
        viewer: Option<UserId>,
    ) -> Result<Option<TopicResult>, TopicQueryError> {
        let Some(topic_id) = parse_id(id) else {
            return Ok(None);
        };

        let Some(topic) = topics::Entity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let relation = match viewer {
            Some(user_id) => topic_users::Entity::find_by_id((topic_id, user_id.value()))
                .one(&*self.db)
                .await
                .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?,
            None => None,
        };

        Ok(Some(topic.to_topic_result(relation.as_ref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn topic_model(id: Uuid) -> topics::Model {
        let now = Utc::now().fixed_offset();
        topics::Model {
            id,
            title: "Rust".into(),
            body: "Body".into(),
            category_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            comments_count: 2,
            likes_count: 5,
            bookmarks_count: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn relation_model(topic_id: Uuid, user_id: Uuid, liked: bool, bookmarked: bool) -> topic_users::Model {
        let now = Utc::now().fixed_offset();
        topic_users::Model {
            topic_id,
            user_id,
            liked_at: liked.then_some(now),
            bookmarked_at: bookmarked.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn anonymous_read_has_no_flags() {
        let topic_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(topic_id)]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topic = query
            .find_topic(&topic_id.to_string(), None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(topic.likes_count, 5);
        assert!(!topic.is_liked_by);
        assert!(!topic.is_bookmarked_by);
    }

    #[tokio::test]
    async fn viewer_flags_come_from_relation_row() {
        let topic_id = Uuid::new_v4();
        let viewer = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(topic_id)]])
            .append_query_results(vec![vec![relation_model(topic_id, viewer, true, false)]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topic = query
            .find_topic(&topic_id.to_string(), Some(UserId::from(viewer)))
            .await
            .unwrap()
            .unwrap();

        assert!(topic.is_liked_by);
        assert!(!topic.is_bookmarked_by);
    }

    #[tokio::test]
    async fn viewer_without_relation_row() {
        let topic_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(topic_id)]])
            .append_query_results(vec![Vec::<topic_users::Model>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topic = query
            .find_topic(&topic_id.to_string(), Some(UserId::from(Uuid::new_v4())))
            .await
            .unwrap()
            .unwrap();

        assert!(!topic.is_liked_by);
    }

    #[tokio::test]
    async fn malformed_id_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let query = TopicQueryPostgres::new(Arc::new(db));

        assert!(query.find_topic("123", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_topic_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<topics::Model>::new()])
            .into_connection();
        let query = TopicQueryPostgres::new(Arc::new(db));

        let found = query
            .find_topic(&Uuid::new_v4().to_string(), None)
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
