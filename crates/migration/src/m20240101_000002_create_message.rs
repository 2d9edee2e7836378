//! Create `message` table with FK to `account`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::MessageId))
                    .col(integer(Message::PostedBy).not_null())
                    .col(string_len(Message::MessageText, 255).not_null())
                    .col(big_integer(Message::TimePostedEpoch).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_account")
                            .from(Message::Table, Message::PostedBy)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Message::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Message { Table, MessageId, PostedBy, MessageText, TimePostedEpoch }

#[derive(DeriveIden)]
enum Account { Table, AccountId }
