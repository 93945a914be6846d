use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Failed to fetch categories: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<CategoryResult>, GetCategoriesError>;

    /// By id, or by name when `key` is not an id.
    async fn find(&self, key: &str) -> Result<Option<CategoryResult>, GetCategoriesError>;
}
