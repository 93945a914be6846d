pub mod modules;
pub use modules::{auth, category, comment, statistic, topic};
pub mod api;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::category::{
    adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres},
    application::{
        category_use_cases::CategoryUseCases,
        ports::incoming::use_cases::EmitCategoryUseCase,
        services::{
            CreateCategoryService, EmitCategoryService, GetCategoriesService,
            UpdateCategoryService,
        },
    },
};
use crate::comment::{
    adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres},
    application::{
        comment_use_cases::CommentUseCases,
        services::{
            CreateCommentService, DeleteCommentService, GetCommentsService, UpdateCommentService,
        },
    },
};
use crate::shared::{api::custom_json_config, config::AppConfig};
use crate::statistic::{
    adapter::outgoing::StatisticRepositoryPostgres,
    application::{
        ports::incoming::use_cases::RecordStatisticUseCase,
        services::{GetStatisticsService, RecordStatisticService},
        statistic_use_cases::StatisticUseCases,
    },
};
use crate::topic::{
    adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres, TopicUserRepositoryPostgres},
    application::{
        services::{
            CreateTopicService, DeleteTopicService, GetTopicService,
            RecomputeTopicCountersService, TopicActionService,
        },
        topic_use_cases::TopicUseCases,
    },
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub category: CategoryUseCases,
    pub topic: TopicUseCases,
    pub comment: CommentUseCases,
    pub statistic: StatisticUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let jwt_config = JwtConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let db_arc = Arc::new(conn);

    // Statistics are shared by category, topic and comment writes
    let statistic_repo = StatisticRepositoryPostgres::new(Arc::clone(&db_arc));
    let record_statistic: Arc<dyn RecordStatisticUseCase + Send + Sync> =
        Arc::new(RecordStatisticService::new(statistic_repo.clone()));

    // Categories
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));
    let emit_category: Arc<dyn EmitCategoryUseCase + Send + Sync> =
        Arc::new(EmitCategoryService::new(category_repo.clone()));

    // Topics
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_user_repo = TopicUserRepositoryPostgres::new(Arc::clone(&db_arc));

    // Comments
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        category: CategoryUseCases {
            create: Arc::new(CreateCategoryService::new(
                category_repo.clone(),
                Arc::clone(&record_statistic),
            )),
            update: Arc::new(UpdateCategoryService::new(category_repo)),
            emit: Arc::clone(&emit_category),
            get: Arc::new(GetCategoriesService::new(category_query)),
        },
        topic: TopicUseCases {
            create: Arc::new(CreateTopicService::new(
                topic_repo.clone(),
                Arc::clone(&emit_category),
                Arc::clone(&record_statistic),
            )),
            get: Arc::new(GetTopicService::new(topic_query.clone())),
            delete: Arc::new(DeleteTopicService::new(
                topic_query,
                topic_repo.clone(),
                Arc::clone(&emit_category),
                Arc::clone(&record_statistic),
            )),
            action: Arc::new(TopicActionService::new(topic_user_repo)),
            recompute: Arc::new(RecomputeTopicCountersService::new(topic_repo)),
        },
        comment: CommentUseCases {
            create: Arc::new(CreateCommentService::new(
                comment_repo.clone(),
                Arc::clone(&record_statistic),
            )),
            update: Arc::new(UpdateCommentService::new(
                comment_query.clone(),
                comment_repo.clone(),
            )),
            delete: Arc::new(DeleteCommentService::new(
                comment_query.clone(),
                comment_repo,
                Arc::clone(&record_statistic),
            )),
            get: Arc::new(GetCommentsService::new(comment_query)),
        },
        statistic: StatisticUseCases {
            record: record_statistic,
            get: Arc::new(GetStatisticsService::new(statistic_repo)),
        },
    };

    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::category::adapter::incoming::web::routes as category_routes;
    use crate::comment::adapter::incoming::web::routes as comment_routes;
    use crate::statistic::adapter::incoming::web::routes as statistic_routes;
    use crate::topic::adapter::incoming::web::routes as topic_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Categories
    cfg.service(category_routes::get_categories_handler);
    cfg.service(category_routes::get_category_handler);
    cfg.service(category_routes::create_category_handler);
    cfg.service(category_routes::update_category_handler);
    cfg.service(category_routes::emit_category_handler);
    // Topics
    cfg.service(topic_routes::create_topic_handler);
    cfg.service(topic_routes::get_topic_handler);
    cfg.service(topic_routes::delete_topic_handler);
    cfg.service(topic_routes::set_topic_action_handler);
    cfg.service(topic_routes::clear_topic_action_handler);
    cfg.service(topic_routes::recompute_topic_counters_handler);
    // Comments
    cfg.service(comment_routes::create_comment_handler);
    cfg.service(comment_routes::get_topic_comments_handler);
    cfg.service(comment_routes::get_user_comments_handler);
    cfg.service(comment_routes::update_comment_handler);
    cfg.service(comment_routes::delete_comment_handler);
    // Statistics
    cfg.service(statistic_routes::get_statistics_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
