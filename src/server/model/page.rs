//! Aggregates backing the customer pages.

use chrono::{DateTime, Utc};

use crate::{
    model::page::{BookTicketDto, HomeDto},
    server::model::{
        booking::Ticket,
        flight::{Airport, Flight},
    },
};

pub struct HomePage {
    pub flights: Vec<Flight>,
    pub tickets: Vec<Ticket>,
    pub start_dates: Vec<DateTime<Utc>>,
}

impl HomePage {
    pub fn into_dto(self) -> HomeDto {
        HomeDto {
            flights: self.flights.into_iter().map(Flight::into_dto).collect(),
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
            start_dates: self.start_dates,
        }
    }
}

pub struct BookTicketPage {
    pub airports: Vec<Airport>,
    /// Search results, `None` when no search criteria were given.
    pub flights: Option<Vec<Flight>>,
}

impl BookTicketPage {
    pub fn into_dto(self) -> BookTicketDto {
        BookTicketDto {
            airports: self.airports.into_iter().map(Airport::into_dto).collect(),
            flights: self
                .flights
                .map(|flights| flights.into_iter().map(Flight::into_dto).collect()),
        }
    }
}
