use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::category::application::{
    domain::entities::CATEGORY_LIST_LIMIT,
    ports::outgoing::{CategoryQuery, CategoryQueryError, CategoryResult},
};
use crate::shared::db::parse_id;

use super::sea_orm_entity::{Column as CategoryColumn, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn find_category(&self, key: &str) -> Result<Option<CategoryResult>, CategoryQueryError> {
        let select = match parse_id(key) {
            Some(category_id) => CategoryEntity::find_by_id(category_id),
            None => {
                let name = key.trim();
                if name.is_empty() {
                    return Ok(None);
                }
                CategoryEntity::find().filter(CategoryColumn::Name.eq(name))
            }
        };

        let model = select
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_category_result()))
    }

    async fn list_categories(&self) -> Result<Vec<CategoryResult>, CategoryQueryError> {
        let models = CategoryEntity::find()
            .order_by_asc(CategoryColumn::Position)
            .limit(CATEGORY_LIST_LIMIT)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_category_result()).collect())
    }
}
