use std::sync::Arc;

use crate::statistic::application::ports::incoming::use_cases::{
    GetStatisticsUseCase, RecordStatisticUseCase,
};

#[derive(Clone)]
pub struct StatisticUseCases {
    pub record: Arc<dyn RecordStatisticUseCase + Send + Sync>,
    pub get: Arc<dyn GetStatisticsUseCase + Send + Sync>,
}
