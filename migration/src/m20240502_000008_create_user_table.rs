use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string_null(User::Phone).unique_key())
                    .col(string_null(User::Email).unique_key())
                    .col(timestamp_with_time_zone_null(User::BirthDay))
                    .col(string_len(User::Gender, 16).default("male"))
                    .col(string_uniq(User::Username))
                    .col(string(User::Password))
                    .col(string_len(User::Role, 16).default("customer"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Phone,
    Email,
    BirthDay,
    Gender,
    Username,
    Password,
    Role,
}
