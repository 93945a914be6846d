mod get_statistics;
mod record_statistic;

pub use get_statistics::{GetStatisticsError, GetStatisticsUseCase};
pub use record_statistic::RecordStatisticUseCase;
