use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::db::count_rows;
use crate::statistic::application::{
    domain::entities::StatisticKind,
    ports::outgoing::{StatisticRepository, StatisticRepositoryError, StatisticResult},
};

use super::sea_orm_entity::{
    ActiveModel as StatisticActiveModel, Column as StatisticColumn, Entity as StatisticEntity,
};

#[derive(Debug, Clone)]
pub struct StatisticRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatisticRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatisticRepository for StatisticRepositoryPostgres {
    async fn upsert_statistic(
        &self,
        kind: StatisticKind,
    ) -> Result<StatisticResult, StatisticRepositoryError> {
        let count = count_rows(&*self.db, kind.count_sql(), vec![]).await?;
        let now = Utc::now().fixed_offset();

        let active = StatisticActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(kind.as_str().to_string()),
            count: Set(count),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = StatisticEntity::insert(active)
            .on_conflict(
                OnConflict::column(StatisticColumn::Name)
                    .update_columns([StatisticColumn::Count, StatisticColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await?;

        Ok(model.to_statistic_result())
    }

    async fn list_statistics(&self) -> Result<Vec<StatisticResult>, StatisticRepositoryError> {
        let models = StatisticEntity::find()
            .order_by_asc(StatisticColumn::Name)
            .all(&*self.db)
            .await?;

        Ok(models.iter().map(|m| m.to_statistic_result()).collect())
    }
}
