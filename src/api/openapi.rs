use crate::api::schemas::{ErrorDetail, ErrorResponse, PageMetaSchema, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::category::{
    adapter::incoming::web::routes::CategoryRequest,
    application::ports::outgoing::CategoryResult,
};
use crate::comment::{
    adapter::incoming::web::routes::CommentRequest, application::ports::outgoing::CommentResult,
};
use crate::statistic::application::ports::outgoing::StatisticResult;
use crate::topic::{
    adapter::incoming::web::routes::CreateTopicRequest,
    application::ports::outgoing::TopicResult,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum API",
        version = "1.0.0",
        description = "Categories, topics, comments and their derived counters"
    ),
    paths(
        // Category endpoints
        crate::category::adapter::incoming::web::routes::get_categories_handler,
        crate::category::adapter::incoming::web::routes::get_category_handler,
        crate::category::adapter::incoming::web::routes::create_category_handler,
        crate::category::adapter::incoming::web::routes::update_category_handler,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::set_topic_action_handler,
        crate::topic::adapter::incoming::web::routes::clear_topic_action_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::create_comment_handler,
        crate::comment::adapter::incoming::web::routes::get_topic_comments_handler,
        crate::comment::adapter::incoming::web::routes::get_user_comments_handler,
        crate::comment::adapter::incoming::web::routes::update_comment_handler,

        // Statistic endpoints
        crate::statistic::adapter::incoming::web::routes::get_statistics_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<TopicResult>,
            PageMetaSchema,
            ErrorResponse,
            ErrorDetail,

            // DTOs
            CategoryRequest,
            CategoryResult,
            CreateTopicRequest,
            TopicResult,
            CommentRequest,
            CommentResult,
            StatisticResult
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "categories", description = "Category management endpoints"),
        (name = "topics", description = "Topic and topic action endpoints"),
        (name = "comments", description = "Comment endpoints"),
        (name = "statistics", description = "Global row counts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
