use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassTicket::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassTicket::Id))
                    .col(string(ClassTicket::Name))
                    .col(double(ClassTicket::Price))
                    .col(text_null(ClassTicket::Benefit))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassTicket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassTicket {
    Table,
    Id,
    Name,
    Price,
    Benefit,
}
