use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Actor,
    category::application::ports::{
        incoming::use_cases::{UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase},
        outgoing::{CategoryRepository, CategoryRepositoryError, CategoryResult},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryService<R>
where
    R: CategoryRepository,
{
    repository: R,
}

impl<R> UpdateCategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCategoryUseCase for UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        command: UpdateCategoryCommand,
    ) -> Result<CategoryResult, UpdateCategoryError> {
        if !actor.is_admin() {
            return Err(UpdateCategoryError::Forbidden);
        }

        self.repository
            .update_category(command.category_id(), command.fields().clone().into())
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::NotFound => UpdateCategoryError::CategoryNotFound,
                CategoryRepositoryError::DatabaseError(msg) => {
                    UpdateCategoryError::TransactionError(msg)
                }
            })
    }
}
