use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::outgoing::CommentResult;
use crate::topic::adapter::outgoing::sea_orm_entity::topics;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub topic_id: Uuid,

    pub user_id: Uuid,

    pub score: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_comment_result(&self) -> CommentResult {
        CommentResult {
            id: self.id,
            body: self.body.clone(),
            topic_id: self.topic_id,
            user_id: UserId::from(self.user_id),
            score: self.score,
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
