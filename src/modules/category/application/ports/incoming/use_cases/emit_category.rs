use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmitCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

/// Must be invoked by anything that creates, deletes or re-categorizes a
/// topic; the category aggregate does not observe topic writes by itself.
#[async_trait]
pub trait EmitCategoryUseCase: Send + Sync {
    async fn execute(&self, category_id: Uuid) -> Result<CategoryResult, EmitCategoryError>;
}
