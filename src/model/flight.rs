use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AirportDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FlightDto {
    pub id: i32,
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub is_active: bool,
    pub image: Option<String>,
    pub plane_id: i32,
    pub flight_route_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SeatDto {
    pub id: i32,
    pub class_ticket_id: i32,
    pub class_name: String,
    pub class_price: f64,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct StopDto {
    pub airport_id: i32,
    pub airport_name: String,
    /// Layover in minutes.
    pub time_stop: Option<i32>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FlightDetailsDto {
    pub flight: FlightDto,
    pub seats: Vec<SeatDto>,
    pub stops: Vec<StopDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreateSeatDto {
    pub class_ticket_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreateFlightDto {
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
    pub image: Option<String>,
    pub plane_id: i32,
    pub flight_route_id: i32,
    #[serde(default)]
    pub seats: Vec<CreateSeatDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UpdateFlightDto {
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub is_active: bool,
    pub image: Option<String>,
    pub plane_id: i32,
    pub flight_route_id: i32,
}

/// Inline edit of the flight name from the admin flight list.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RenameFlightDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PaginatedFlightsDto {
    pub flights: Vec<FlightDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
