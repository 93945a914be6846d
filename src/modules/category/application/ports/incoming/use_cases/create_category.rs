use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Actor,
    category::application::{
        domain::entities::{CategoryFields, CategoryFieldsError},
        ports::outgoing::CategoryResult,
    },
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    fields: CategoryFields,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryCommandError {
    #[error("Name cannot be blank")]
    BlankName,

    #[error("Position cannot be negative")]
    NegativePosition,
}

impl From<CategoryFieldsError> for CategoryCommandError {
    fn from(e: CategoryFieldsError) -> Self {
        match e {
            CategoryFieldsError::BlankName => CategoryCommandError::BlankName,
            CategoryFieldsError::NegativePosition => CategoryCommandError::NegativePosition,
        }
    }
}

impl CreateCategoryCommand {
    pub fn new(
        name: &str,
        alias: Option<&str>,
        description: Option<&str>,
        position: i64,
    ) -> Result<Self, CategoryCommandError> {
        let fields = CategoryFields::normalize(name, alias, description, position)?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &CategoryFields {
        &self.fields
    }

    pub fn into_fields(self) -> CategoryFields {
        self.fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Only administrators can manage categories")]
    Forbidden,

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        command: CreateCategoryCommand,
    ) -> Result<CategoryResult, CreateCategoryError>;
}
