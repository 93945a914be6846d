use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topic_users relation table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TopicUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TopicUsers::TopicId).uuid().not_null())
                    .col(ColumnDef::new(TopicUsers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(TopicUsers::LikedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TopicUsers::BookmarkedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TopicUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TopicUsers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // One relation row per (topic, user)
                    .primary_key(
                        Index::create()
                            .col(TopicUsers::TopicId)
                            .col(TopicUsers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_users_topic_id")
                            .from(TopicUsers::Table, TopicUsers::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_users_user_id")
                            .from(TopicUsers::Table, TopicUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Pre-toggle counts only look at set flags
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topic_users_liked
                ON topic_users (topic_id)
                WHERE liked_at IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topic_users_bookmarked
                ON topic_users (topic_id)
                WHERE bookmarked_at IS NOT NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topic_users_liked;
                DROP INDEX IF EXISTS idx_topic_users_bookmarked;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TopicUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TopicUsers {
    Table,
    TopicId,
    UserId,
    LikedAt,
    BookmarkedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
