use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::comment::application::{
    domain::entities::{
        comments_count_after_create, comments_count_after_delete, is_recently_active,
    },
    ports::outgoing::{
        CommentRepository, CommentRepositoryError, CommentResult, CreateCommentData,
    },
};
use crate::shared::db::{count_rows, run_in_transaction};
use crate::topic::adapter::outgoing::sea_orm_entity::topics;

use super::sea_orm_entity::{ActiveModel as CommentActiveModel, Entity as CommentEntity};

const COUNT_COMMENTS: &str = "SELECT count(*) AS count FROM comments WHERE topic_id = $1";

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let topic = topics::Entity::find_by_id(data.topic_id)
                    .one(txn)
                    .await?
                    .ok_or(CommentRepositoryError::TopicNotFound)?;

                let count = count_rows(txn, COUNT_COMMENTS, vec![data.topic_id.into()]).await?;
                let now = Utc::now();

                // Old topics keep their position in activity-ordered listings.
                let bump = is_recently_active(topic.updated_at.into(), now);

                let mut active: topics::ActiveModel = topic.into();
                active.comments_count = Set(comments_count_after_create(count));
                if bump {
                    active.updated_at = Set(now.fixed_offset());
                }
                active.update(txn).await?;

                let comment = CommentResult {
                    id: Uuid::new_v4(),
                    body: data.body,
                    topic_id: data.topic_id,
                    user_id: data.author,
                    score: 0,
                    created_at: now,
                    updated_at: now,
                };

                let row = CommentActiveModel {
                    id: Set(comment.id),
                    body: Set(comment.body.clone()),
                    topic_id: Set(comment.topic_id),
                    user_id: Set(comment.user_id.into()),
                    score: Set(comment.score),
                    created_at: Set(now.fixed_offset()),
                    updated_at: Set(now.fixed_offset()),
                };
                CommentEntity::insert_many([row])
                    .exec_without_returning(txn)
                    .await?;

                tracing::debug!(
                    comment_id = %comment.id,
                    topic_id = %comment.topic_id,
                    comments_count = count + 1,
                    "comment created"
                );

                Ok(comment)
            })
        })
        .await
    }

    async fn update_comment_body(
        &self,
        comment_id: Uuid,
        body: String,
    ) -> Result<CommentResult, CommentRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let comment = CommentEntity::find_by_id(comment_id)
                    .one(txn)
                    .await?
                    .ok_or(CommentRepositoryError::CommentNotFound)?;

                let mut active: CommentActiveModel = comment.into();
                active.body = Set(body);
                active.updated_at = Set(Utc::now().fixed_offset());

                let updated = active.update(txn).await?;
                Ok(updated.to_comment_result())
            })
        })
        .await
    }

    async fn delete_comment(&self, comment: &CommentResult) -> Result<(), CommentRepositoryError> {
        let comment_id = comment.id;
        let topic_id = comment.topic_id;

        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let topic = topics::Entity::find_by_id(topic_id)
                    .one(txn)
                    .await?
                    .ok_or(CommentRepositoryError::BadData)?;

                // Counted while the comment row still exists.
                let count = count_rows(txn, COUNT_COMMENTS, vec![topic_id.into()]).await?;

                let mut active: topics::ActiveModel = topic.into();
                active.comments_count = Set(comments_count_after_delete(count));
                active.update(txn).await?;

                let deleted = CommentEntity::delete_by_id(comment_id).exec(txn).await?;
                if deleted.rows_affected == 0 {
                    return Err(CommentRepositoryError::CommentNotFound);
                }

                Ok(())
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::comment::adapter::outgoing::sea_orm_entity::Model as CommentModel;
    use crate::shared::db::test_rows::{
        bound_value, count_row, logged_statements, statement_starting, writes_column,
    };
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value};

    fn topic_model(id: Uuid, comments_count: i64, age_days: i64) -> topics::Model {
        let stamp = (Utc::now() - Duration::days(age_days)).fixed_offset();
        topics::Model {
            id,
            title: "Rust".into(),
            body: "Ownership".into(),
            category_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            comments_count,
            likes_count: 0,
            bookmarks_count: 0,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn comment_model(id: Uuid, topic_id: Uuid, body: &str) -> CommentModel {
        let now = Utc::now().fixed_offset();
        CommentModel {
            id,
            body: body.into(),
            topic_id,
            user_id: Uuid::new_v4(),
            score: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn create_data(topic_id: Uuid) -> CreateCommentData {
        CreateCommentData {
            topic_id,
            author: UserId::from(Uuid::new_v4()),
            body: "a thoughtful reply".into(),
        }
    }

    #[tokio::test]
    async fn create_comment_rewrites_topic_count() {
        let topic_id = Uuid::new_v4();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![topic_model(topic_id, 0, 1)]])
                .append_query_results(vec![vec![count_row(3)]])
                .append_query_results(vec![vec![topic_model(topic_id, 4, 0)]])
                .append_exec_results(vec![exec(1)])
                .into_connection(),
        );

        let repo = CommentRepositoryPostgres::new(Arc::clone(&db));

        let comment = repo.create_comment(create_data(topic_id)).await.unwrap();

        assert_eq!(comment.topic_id, topic_id);
        assert_eq!(comment.body, "a thoughtful reply");
        assert_eq!(comment.score, 0);
        assert_eq!(comment.created_at, comment.updated_at);

        drop(repo);
        let stmts = logged_statements(db);

        // stored count was 0; the fresh count of 3 wins
        let update = statement_starting(&stmts, r#"UPDATE "topics""#);
        assert_eq!(bound_value(update, "comments_count"), Some(Value::from(4i64)));
        assert!(writes_column(update, "updated_at"));

        let insert = statement_starting(&stmts, r#"INSERT INTO "comments""#);
        assert_eq!(
            bound_value(insert, "body"),
            Some(Value::from("a thoughtful reply"))
        );

        let update_at = stmts.iter().position(|s| std::ptr::eq(s, update));
        let insert_at = stmts.iter().position(|s| std::ptr::eq(s, insert));
        assert!(update_at < insert_at);
    }

    #[tokio::test]
    async fn create_comment_on_stale_topic_keeps_updated_at() {
        let topic_id = Uuid::new_v4();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![topic_model(topic_id, 0, 45)]])
                .append_query_results(vec![vec![count_row(0)]])
                .append_query_results(vec![vec![topic_model(topic_id, 1, 45)]])
                .append_exec_results(vec![exec(1)])
                .into_connection(),
        );

        let repo = CommentRepositoryPostgres::new(Arc::clone(&db));

        assert!(repo.create_comment(create_data(topic_id)).await.is_ok());

        drop(repo);
        let stmts = logged_statements(db);

        let update = statement_starting(&stmts, r#"UPDATE "topics""#);
        assert_eq!(bound_value(update, "comments_count"), Some(Value::from(1i64)));
        assert!(!writes_column(update, "updated_at"));
    }

    #[tokio::test]
    async fn create_comment_on_missing_topic() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<topics::Model>::new()])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_comment(create_data(Uuid::new_v4())).await,
            Err(CommentRepositoryError::TopicNotFound)
        ));
    }

    #[tokio::test]
    async fn create_comment_propagates_insert_failure() {
        let topic_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(topic_id, 0, 1)]])
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![vec![topic_model(topic_id, 1, 0)]])
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal("insert failed".into()))])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_comment(create_data(topic_id)).await,
            Err(CommentRepositoryError::DatabaseError(msg)) if msg.contains("insert failed")
        ));
    }

    #[tokio::test]
    async fn update_comment_body() {
        let comment_id = Uuid::new_v4();
        let topic_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment_model(comment_id, topic_id, "before edit")]])
            .append_query_results(vec![vec![comment_model(comment_id, topic_id, "after edit")]])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        let updated = repo
            .update_comment_body(comment_id, "after edit".into())
            .await
            .unwrap();

        assert_eq!(updated.id, comment_id);
        assert_eq!(updated.body, "after edit");
    }

    #[tokio::test]
    async fn update_missing_comment() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CommentModel>::new()])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.update_comment_body(Uuid::new_v4(), "after edit".into()).await,
            Err(CommentRepositoryError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_comment_decrements_from_fresh_count() {
        let topic_id = Uuid::new_v4();
        let comment = comment_model(Uuid::new_v4(), topic_id, "to be removed").to_comment_result();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![topic_model(topic_id, 7, 1)]])
                .append_query_results(vec![vec![count_row(2)]])
                .append_query_results(vec![vec![topic_model(topic_id, 1, 1)]])
                .append_exec_results(vec![exec(1)])
                .into_connection(),
        );

        let repo = CommentRepositoryPostgres::new(Arc::clone(&db));

        assert!(repo.delete_comment(&comment).await.is_ok());

        drop(repo);
        let stmts = logged_statements(db);

        // stored 7 is stale; counted 2 with the row still present
        let update = statement_starting(&stmts, r#"UPDATE "topics""#);
        assert_eq!(bound_value(update, "comments_count"), Some(Value::from(1i64)));
        assert!(!writes_column(update, "updated_at"));

        let update_at = stmts.iter().position(|s| s.sql.starts_with(r#"UPDATE "topics""#));
        let delete_at = stmts
            .iter()
            .position(|s| s.sql.starts_with(r#"DELETE FROM "comments""#));
        assert!(delete_at.is_some());
        assert!(update_at < delete_at);
    }

    #[tokio::test]
    async fn delete_last_comment_floors_at_zero() {
        let topic_id = Uuid::new_v4();
        let comment = comment_model(Uuid::new_v4(), topic_id, "only reply").to_comment_result();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![topic_model(topic_id, 0, 1)]])
                .append_query_results(vec![vec![count_row(0)]])
                .append_query_results(vec![vec![topic_model(topic_id, 0, 1)]])
                .append_exec_results(vec![exec(1)])
                .into_connection(),
        );

        let repo = CommentRepositoryPostgres::new(Arc::clone(&db));

        assert!(repo.delete_comment(&comment).await.is_ok());

        drop(repo);
        let stmts = logged_statements(db);

        let update = statement_starting(&stmts, r#"UPDATE "topics""#);
        assert_eq!(bound_value(update, "comments_count"), Some(Value::from(0i64)));
    }

    #[tokio::test]
    async fn delete_comment_with_missing_topic_is_bad_data() {
        let comment =
            comment_model(Uuid::new_v4(), Uuid::new_v4(), "orphaned").to_comment_result();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<topics::Model>::new()])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_comment(&comment).await,
            Err(CommentRepositoryError::BadData)
        ));
    }

    #[tokio::test]
    async fn delete_comment_already_gone() {
        let topic_id = Uuid::new_v4();
        let comment = comment_model(Uuid::new_v4(), topic_id, "raced away").to_comment_result();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![topic_model(topic_id, 1, 1)]])
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![vec![topic_model(topic_id, 0, 1)]])
            .append_exec_results(vec![exec(0)])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_comment(&comment).await,
            Err(CommentRepositoryError::CommentNotFound)
        ));
    }
}
