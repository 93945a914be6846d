use crate::statistic::application::domain::entities::StatisticKind;

/// Fire-and-forget refresh of one global total. Never blocks the caller and
/// never reports failure back to it.
pub trait RecordStatisticUseCase: Send + Sync {
    fn record(&self, kind: StatisticKind);
}
