use std::sync::Arc;

use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, EmitCategoryUseCase, GetCategoriesUseCase, UpdateCategoryUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub emit: Arc<dyn EmitCategoryUseCase + Send + Sync>,
    pub get: Arc<dyn GetCategoriesUseCase + Send + Sync>,
}
