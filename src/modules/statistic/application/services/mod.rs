mod get_statistics_service;
mod record_statistic_service;

pub use get_statistics_service::GetStatisticsService;
pub use record_statistic_service::RecordStatisticService;
