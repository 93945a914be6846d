use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Actor,
    category::application::{domain::entities::CategoryFields, ports::outgoing::CategoryResult},
};

use super::CategoryCommandError;

#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    category_id: Uuid,
    fields: CategoryFields,
}

impl UpdateCategoryCommand {
    pub fn new(
        category_id: Uuid,
        name: &str,
        alias: Option<&str>,
        description: Option<&str>,
        position: i64,
    ) -> Result<Self, CategoryCommandError> {
        let fields = CategoryFields::normalize(name, alias, description, position)?;
        Ok(Self {
            category_id,
            fields,
        })
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn fields(&self) -> &CategoryFields {
        &self.fields
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("Only administrators can manage categories")]
    Forbidden,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        command: UpdateCategoryCommand,
    ) -> Result<CategoryResult, UpdateCategoryError>;
}
