use actix_web::{get, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    statistic::application::ports::{
        incoming::use_cases::GetStatisticsError, outgoing::StatisticResult,
    },
    AppState,
};

/// Global totals
///
/// Best-effort counters refreshed in the background after writes.
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = "statistics",
    responses(
        (status = 200, description = "All statistic rows", body = [StatisticResult]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/statistics")]
pub async fn get_statistics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.statistic.get.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(GetStatisticsError::QueryFailed(msg)) => {
            tracing::error!(error = %msg, "failed to read statistics");
            ApiResponse::internal_error()
        }
    }
}
