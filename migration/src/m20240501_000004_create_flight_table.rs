use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240501_000002_create_plane_table::Plane,
    m20240501_000003_create_flight_route_table::FlightRoute,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string(Flight::Name))
                    .col(timestamp_with_time_zone_null(Flight::StartDate))
                    .col(timestamp_with_time_zone_null(Flight::EndDate))
                    .col(double_null(Flight::Price))
                    .col(boolean(Flight::IsActive).default(false))
                    .col(string_null(Flight::Image))
                    .col(integer(Flight::PlaneId))
                    .col(integer(Flight::FlightRouteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_plane_id")
                            .from(Flight::Table, Flight::PlaneId)
                            .to(Plane::Table, Plane::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_flight_route_id")
                            .from(Flight::Table, Flight::FlightRouteId)
                            .to(FlightRoute::Table, FlightRoute::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Price,
    IsActive,
    Image,
    PlaneId,
    FlightRouteId,
}
