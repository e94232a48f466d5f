use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000004_create_flight_table::Flight,
    m20240501_000006_create_class_ticket_table::ClassTicket,
    m20240502_000008_create_user_table::User, m20240502_000009_create_bill_table::Bill,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(
                        timestamp_with_time_zone(Ticket::BookedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(double(Ticket::Price))
                    .col(integer(Ticket::FlightId))
                    .col(integer(Ticket::UserId))
                    .col(integer(Ticket::ClassTicketId))
                    .col(integer(Ticket::BillId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_flight_id")
                            .from(Ticket::Table, Ticket::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_user_id")
                            .from(Ticket::Table, Ticket::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_class_ticket_id")
                            .from(Ticket::Table, Ticket::ClassTicketId)
                            .to(ClassTicket::Table, ClassTicket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_bill_id")
                            .from(Ticket::Table, Ticket::BillId)
                            .to(Bill::Table, Bill::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    BookedDate,
    Price,
    FlightId,
    UserId,
    ClassTicketId,
    BillId,
}
