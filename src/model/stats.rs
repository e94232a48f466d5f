use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RouteFlightCountDto {
    pub flight_route_id: i32,
    pub name: String,
    pub flight_count: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RouteRevenueDto {
    pub flight_route_id: i32,
    pub name: String,
    pub revenue: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PeriodRevenueDto {
    /// Month (1-12) or quarter (1-4) depending on the requested period.
    pub period: u32,
    pub revenue: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RevenueStatsDto {
    pub year: i32,
    pub period: String,
    pub revenue_by_flight_route: Vec<RouteRevenueDto>,
    pub revenue_by_period: Vec<PeriodRevenueDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AdminIndexDto {
    pub user: Option<UserDto>,
    pub flight_counts: Vec<RouteFlightCountDto>,
}
