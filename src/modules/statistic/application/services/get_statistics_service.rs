use async_trait::async_trait;

use crate::statistic::application::ports::{
    incoming::use_cases::{GetStatisticsError, GetStatisticsUseCase},
    outgoing::{StatisticRepository, StatisticResult},
};

#[derive(Debug, Clone)]
pub struct GetStatisticsService<R>
where
    R: StatisticRepository,
{
    repository: R,
}

impl<R> GetStatisticsService<R>
where
    R: StatisticRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetStatisticsUseCase for GetStatisticsService<R>
where
    R: StatisticRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<StatisticResult>, GetStatisticsError> {
        self.repository
            .list_statistics()
            .await
            .map_err(|e| GetStatisticsError::QueryFailed(e.to_string()))
    }
}
