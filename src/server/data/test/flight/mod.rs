use crate::server::{
    data::flight::FlightRepository,
    model::flight::{
        CreateFlightParams, FlightSearchParams, SaveFlightParams, SeatParam, UpdateFlightParams,
    },
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod search;
mod write;

fn save_params(flight_route_id: i32, plane_id: i32, name: &str) -> SaveFlightParams {
    SaveFlightParams {
        name: name.to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).single(),
        end_date: Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).single(),
        price: Some(1_000_000.0),
        is_active: true,
        image: None,
        plane_id,
        flight_route_id,
    }
}
