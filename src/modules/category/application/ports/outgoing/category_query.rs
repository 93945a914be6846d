use async_trait::async_trait;

use super::CategoryResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Looks `key` up as an id when it parses as one, otherwise as an exact
    /// name. A blank key resolves to `Ok(None)`.
    async fn find_category(&self, key: &str) -> Result<Option<CategoryResult>, CategoryQueryError>;

    /// Ordered by position.
    async fn list_categories(&self) -> Result<Vec<CategoryResult>, CategoryQueryError>;
}
