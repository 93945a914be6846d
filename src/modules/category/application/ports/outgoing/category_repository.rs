use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::category::application::domain::entities::CategoryFields;

/// Input for create and update. `position == 0` means "append".
#[derive(Debug, Clone)]
pub struct SaveCategoryData {
    pub name: String,
    pub alias: String,
    pub description: String,
    pub position: i64,
}

impl From<CategoryFields> for SaveCategoryData {
    fn from(fields: CategoryFields) -> Self {
        Self {
            name: fields.name,
            alias: fields.alias,
            description: fields.description,
            position: fields.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryResult {
    pub id: Uuid,
    pub name: String,
    pub alias: String,
    pub description: String,
    pub topics_count: i64,
    pub last_topic_id: Option<Uuid>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DbErr> for CategoryRepositoryError {
    fn from(e: DbErr) -> Self {
        CategoryRepositoryError::DatabaseError(e.to_string())
    }
}

/// Command side of the categories table. Every method runs in its own
/// transaction.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: SaveCategoryData,
    ) -> Result<CategoryResult, CategoryRepositoryError>;

    async fn update_category(
        &self,
        category_id: Uuid,
        data: SaveCategoryData,
    ) -> Result<CategoryResult, CategoryRepositoryError>;

    /// Recomputes `last_topic_id` and `topics_count` from the topics table.
    async fn emit_category(
        &self,
        category_id: Uuid,
    ) -> Result<CategoryResult, CategoryRepositoryError>;
}
