use sea_orm_migration::{prelude::*, schema::*};

use super::m20240502_000008_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(integer(Bill::PayerId))
                    .col(double(Bill::TotalBill).default(0.0))
                    .col(boolean(Bill::IsPaid).default(false))
                    .col(
                        timestamp_with_time_zone(Bill::CreatedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_payer_id")
                            .from(Bill::Table, Bill::PayerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bill_created_date")
                    .table(Bill::Table)
                    .col(Bill::CreatedDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    PayerId,
    TotalBill,
    IsPaid,
    CreatedDate,
}
