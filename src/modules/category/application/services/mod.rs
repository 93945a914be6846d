mod create_category_service;
mod emit_category_service;
mod get_categories_service;
mod update_category_service;

pub use create_category_service::CreateCategoryService;
pub use emit_category_service::EmitCategoryService;
pub use get_categories_service::GetCategoriesService;
pub use update_category_service::UpdateCategoryService;
