use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;

use crate::statistic::application::domain::entities::StatisticKind;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatisticResult {
    #[schema(example = "comments")]
    pub name: String,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatisticRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DbErr> for StatisticRepositoryError {
    fn from(e: DbErr) -> Self {
        StatisticRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
pub trait StatisticRepository: Send + Sync {
    /// Recounts the source table and upserts the row keyed by name.
    async fn upsert_statistic(
        &self,
        kind: StatisticKind,
    ) -> Result<StatisticResult, StatisticRepositoryError>;

    async fn list_statistics(&self) -> Result<Vec<StatisticResult>, StatisticRepositoryError>;
}
