use async_trait::async_trait;

use crate::statistic::application::ports::outgoing::StatisticResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStatisticsError {
    #[error("Failed to fetch statistics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetStatisticsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<StatisticResult>, GetStatisticsError>;
}
