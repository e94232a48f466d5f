use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000001_create_airport_table::Airport, m20240501_000004_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StopByAirport::Table)
                    .if_not_exists()
                    .col(integer(StopByAirport::FlightId))
                    .col(integer(StopByAirport::AirportId))
                    .col(integer_null(StopByAirport::TimeStop))
                    .col(string_null(StopByAirport::Note))
                    .primary_key(
                        Index::create()
                            .col(StopByAirport::FlightId)
                            .col(StopByAirport::AirportId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stop_by_airport_flight_id")
                            .from(StopByAirport::Table, StopByAirport::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stop_by_airport_airport_id")
                            .from(StopByAirport::Table, StopByAirport::AirportId)
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
            .drop_table(Table::drop().table(StopByAirport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StopByAirport {
    Table,
    FlightId,
    AirportId,
    TimeStop,
    Note,
}
