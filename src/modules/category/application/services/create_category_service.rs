use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    auth::application::domain::entities::Actor,
    category::application::ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
        outgoing::{CategoryRepository, CategoryResult},
    },
    statistic::application::{
        domain::entities::StatisticKind, ports::incoming::use_cases::RecordStatisticUseCase,
    },
};

#[derive(Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository,
{
    repository: R,
    statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R, statistics: Arc<dyn RecordStatisticUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            statistics,
        }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        command: CreateCategoryCommand,
    ) -> Result<CategoryResult, CreateCategoryError> {
        if !actor.is_admin() {
            return Err(CreateCategoryError::Forbidden);
        }

        let category = self
            .repository
            .create_category(command.into_fields().into())
            .await
            .map_err(|e| CreateCategoryError::TransactionError(e.to_string()))?;

        self.statistics.record(StatisticKind::Categories);

        Ok(category)
    }
}
