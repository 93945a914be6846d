use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::TopicUserRelation;

use super::topics;

/// One row per (topic, user) pair that ever interacted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topic_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,

    pub liked_at: Option<DateTimeWithTimeZone>,

    pub bookmarked_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_relation(&self) -> TopicUserRelation {
        TopicUserRelation {
            topic_id: self.topic_id,
            user_id: UserId::from(self.user_id),
            liked_at: self.liked_at.map(Into::into),
            bookmarked_at: self.bookmarked_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "topics::Entity",
        from = "Column::TopicId",
        to = "topics::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
