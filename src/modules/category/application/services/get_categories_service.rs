use async_trait::async_trait;

use crate::category::application::ports::{
    incoming::use_cases::{GetCategoriesError, GetCategoriesUseCase},
    outgoing::{CategoryQuery, CategoryResult},
};

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: CategoryQuery,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: CategoryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn list(&self) -> Result<Vec<CategoryResult>, GetCategoriesError> {
        self.query
            .list_categories()
            .await
            .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))
    }

    async fn find(&self, key: &str) -> Result<Option<CategoryResult>, GetCategoriesError> {
        self.query
            .find_category(key)
            .await
            .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))
    }
}
