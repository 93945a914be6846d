use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::category::adapter::outgoing::sea_orm_entity as categories;
use crate::topic::application::ports::outgoing::TopicResult;

use super::topic_users;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub category_id: Uuid,

    pub user_id: Uuid,

    pub comments_count: i64,

    pub likes_count: i64,

    pub bookmarks_count: i64,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// `relation` is the viewer's relation row, if any.
    pub fn to_topic_result(&self, relation: Option<&topic_users::Model>) -> TopicResult {
        TopicResult {
            id: self.id,
            title: self.title.clone(),
            body: self.body.clone(),
            category_id: self.category_id,
            user_id: UserId::from(self.user_id),
            comments_count: self.comments_count,
            likes_count: self.likes_count,
            bookmarks_count: self.bookmarks_count,
            is_liked_by: relation.is_some_and(|r| r.liked_at.is_some()),
            is_bookmarked_by: relation.is_some_and(|r| r.bookmarked_at.is_some()),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "categories::Entity",
        from = "Column::CategoryId",
        to = "categories::Column::Id",
        on_delete = "Cascade"
    )]
    Category,

    #[sea_orm(has_many = "topic_users::Entity")]
    TopicUsers,
}

impl Related<categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<topic_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TopicUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
