use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FlightRouteDto {
    pub id: i32,
    pub name: String,
    pub start_airport_id: i32,
    pub end_airport_id: i32,
    /// Names of the flights operating on this route.
    pub flights: Vec<String>,
}

/// Body of both the create and the update route requests.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SaveFlightRouteDto {
    pub name: String,
    pub start_airport_id: i32,
    pub end_airport_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PaginatedFlightRoutesDto {
    pub flight_routes: Vec<FlightRouteDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
