use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::{
    incoming::use_cases::{EmitCategoryError, EmitCategoryUseCase},
    outgoing::{CategoryRepository, CategoryRepositoryError, CategoryResult},
};

#[derive(Debug, Clone)]
pub struct EmitCategoryService<R>
where
    R: CategoryRepository,
{
    repository: R,
}

impl<R> EmitCategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EmitCategoryUseCase for EmitCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, category_id: Uuid) -> Result<CategoryResult, EmitCategoryError> {
        let category = self
            .repository
            .emit_category(category_id)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::NotFound => EmitCategoryError::CategoryNotFound,
                CategoryRepositoryError::DatabaseError(msg) => {
                    EmitCategoryError::TransactionError(msg)
                }
            })?;

        tracing::debug!(
            category_id = %category.id,
            topics_count = category.topics_count,
            "category aggregate refreshed"
        );

        Ok(category)
    }
}
