//! Secondary indexes for the hot read paths.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // GET /accounts/:account_id/messages filters on posted_by.
        manager
            .create_index(
                Index::create()
                    .name("idx_message_posted_by")
                    .table(Message::Table)
                    .col(Message::PostedBy)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_message_posted_by").table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Message { Table, PostedBy }
