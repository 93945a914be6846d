use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::{
    domain::entities::{next_position, CategoryAggregate},
    ports::outgoing::{
        CategoryRepository, CategoryRepositoryError, CategoryResult, SaveCategoryData,
    },
};
use crate::shared::db::{count_rows, run_in_transaction};
use crate::topic::adapter::outgoing::sea_orm_entity::topics;

use super::sea_orm_entity::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as CategoryEntity,
};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Resolves `0` to one past the highest stored position.
async fn resolve_position<C>(conn: &C, requested: i64) -> Result<i64, CategoryRepositoryError>
where
    C: ConnectionTrait,
{
    if requested != 0 {
        return Ok(requested);
    }

    let last = CategoryEntity::find()
        .order_by_desc(CategoryColumn::Position)
        .one(conn)
        .await?;

    Ok(next_position(last.map(|c| c.position)))
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: SaveCategoryData,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let position = resolve_position(txn, data.position).await?;
                let now = Utc::now().fixed_offset();

                let active = CategoryActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(data.name),
                    alias: Set(data.alias),
                    description: Set(data.description),
                    topics_count: Set(0),
                    last_topic_id: Set(None),
                    position: Set(position),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let inserted = active.insert(txn).await?;
                Ok(inserted.to_category_result())
            })
        })
        .await
    }

    async fn update_category(
        &self,
        category_id: Uuid,
        data: SaveCategoryData,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let existing = CategoryEntity::find_by_id(category_id)
                    .one(txn)
                    .await?
                    .ok_or(CategoryRepositoryError::NotFound)?;

                let position = resolve_position(txn, data.position).await?;

                let mut active: CategoryActiveModel = existing.into();
                active.name = Set(data.name);
                active.alias = Set(data.alias);
                active.description = Set(data.description);
                active.position = Set(position);
                active.updated_at = Set(Utc::now().fixed_offset());

                let updated = active.update(txn).await?;
                Ok(updated.to_category_result())
            })
        })
        .await
    }

    async fn emit_category(
        &self,
        category_id: Uuid,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        run_in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let existing = CategoryEntity::find_by_id(category_id)
                    .one(txn)
                    .await?
                    .ok_or(CategoryRepositoryError::NotFound)?;

                let last_topic = topics::Entity::find()
                    .filter(topics::Column::CategoryId.eq(category_id))
                    .order_by_desc(topics::Column::CreatedAt)
                    .one(txn)
                    .await?;

                let aggregate = match last_topic {
                    Some(topic) => {
                        let count = count_rows(
                            txn,
                            "SELECT count(*) AS count FROM topics WHERE category_id = $1",
                            vec![category_id.into()],
                        )
                        .await?;
                        CategoryAggregate::derive(Some(topic.id), count)
                    }
                    None => CategoryAggregate::derive(None, 0),
                };

                let mut active: CategoryActiveModel = existing.into();
                active.last_topic_id = Set(aggregate.last_topic_id);
                active.topics_count = Set(aggregate.topics_count);
                active.updated_at = Set(Utc::now().fixed_offset());

                let updated = active.update(txn).await?;
                Ok(updated.to_category_result())
            })
        })
        .await
    }
}
