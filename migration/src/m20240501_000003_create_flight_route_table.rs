use sea_orm_migration::{prelude::*, schema::*};

use super::m20240501_000001_create_airport_table::Airport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightRoute::Id))
                    .col(string(FlightRoute::Name))
                    .col(integer(FlightRoute::StartAirportId))
                    .col(integer(FlightRoute::EndAirportId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_route_start_airport_id")
                            .from(FlightRoute::Table, FlightRoute::StartAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_route_end_airport_id")
                            .from(FlightRoute::Table, FlightRoute::EndAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightRoute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightRoute {
    Table,
    Id,
    Name,
    StartAirportId,
    EndAirportId,
}
