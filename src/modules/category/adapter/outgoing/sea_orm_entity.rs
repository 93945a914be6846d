use sea_orm::entity::prelude::*;

use crate::category::application::ports::outgoing::CategoryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub alias: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub topics_count: i64,

    pub last_topic_id: Option<Uuid>,

    pub position: i64,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_category_result(&self) -> CategoryResult {
        CategoryResult {
            id: self.id,
            name: self.name.clone(),
            alias: self.alias.clone(),
            description: self.description.clone(),
            topics_count: self.topics_count,
            last_topic_id: self.last_topic_id,
            position: self.position,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::topic::adapter::outgoing::sea_orm_entity::topics::Entity")]
    Topics,
}

impl Related<crate::topic::adapter::outgoing::sea_orm_entity::topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
