use crate::statistic::application::{
    domain::entities::StatisticKind,
    ports::{incoming::use_cases::RecordStatisticUseCase, outgoing::StatisticRepository},
};

/// Spawns each upsert as a detached task on the current tokio runtime.
#[derive(Debug, Clone)]
pub struct RecordStatisticService<R>
where
    R: StatisticRepository + Clone + 'static,
{
    repository: R,
}

impl<R> RecordStatisticService<R>
where
    R: StatisticRepository + Clone + 'static,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R> RecordStatisticUseCase for RecordStatisticService<R>
where
    R: StatisticRepository + Clone + 'static,
{
    fn record(&self, kind: StatisticKind) {
        let repository = self.repository.clone();

        tokio::spawn(async move {
            match repository.upsert_statistic(kind).await {
                Ok(stat) => {
                    tracing::debug!(statistic = %stat.name, count = stat.count, "statistic upserted")
                }
                Err(e) => {
                    tracing::warn!(statistic = kind.as_str(), error = %e, "statistic upsert failed")
                }
            }
        });
    }
}
