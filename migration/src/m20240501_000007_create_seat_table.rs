use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000004_create_flight_table::Flight,
    m20240501_000006_create_class_ticket_table::ClassTicket,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(integer(Seat::Quantity).default(0))
                    .col(integer(Seat::ClassTicketId))
                    .col(integer(Seat::FlightId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_class_ticket_id")
                            .from(Seat::Table, Seat::ClassTicketId)
                            .to(ClassTicket::Table, ClassTicket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_flight_id")
                            .from(Seat::Table, Seat::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    Id,
    Quantity,
    ClassTicketId,
    FlightId,
}
