//! Data backing the customer-facing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    booking::TicketDto,
    flight::{AirportDto, FlightDto},
};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct HomeDto {
    pub flights: Vec<FlightDto>,
    pub tickets: Vec<TicketDto>,
    pub start_dates: Vec<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BookTicketDto {
    pub airports: Vec<AirportDto>,
    /// Matching flights, present only when search criteria were given.
    pub flights: Option<Vec<FlightDto>>,
}

/// Login and registration page state.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Default)]
pub struct FormPageDto {
    pub err_msg: Option<String>,
}
