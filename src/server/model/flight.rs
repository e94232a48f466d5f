//! Flight domain models and parameters.
//!
//! Covers airports, flights and the per-flight seat inventory and stopovers shown on
//! the flight detail view, together with the parameters used by flight search and the
//! admin flight editor.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::flight::{
    AirportDto, CreateFlightDto, FlightDetailsDto, FlightDto, PaginatedFlightsDto, SeatDto,
    StopDto, UpdateFlightDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Airport {
    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

/// A scheduled flight on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Base fare, added to the fare class price when booking.
    pub price: Option<f64>,
    pub is_active: bool,
    pub image: Option<String>,
    pub plane_id: i32,
    pub flight_route_id: i32,
}

impl Flight {
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            price: entity.price,
            is_active: entity.is_active,
            image: entity.image,
            plane_id: entity.plane_id,
            flight_route_id: entity.flight_route_id,
        }
    }

    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            is_active: self.is_active,
            image: self.image,
            plane_id: self.plane_id,
            flight_route_id: self.flight_route_id,
        }
    }
}

/// Seat inventory of one fare class on a flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub id: i32,
    pub class_ticket_id: i32,
    pub class_name: String,
    pub class_price: f64,
    pub quantity: i32,
}

impl Seat {
    /// Builds a seat from its row and the fare class it belongs to.
    ///
    /// A missing class (which foreign keys prevent) yields an empty name and zero price.
    pub fn from_entity(
        entity: entity::seat::Model,
        class_ticket: Option<entity::class_ticket::Model>,
    ) -> Self {
        let (class_name, class_price) = class_ticket
            .map(|c| (c.name, c.price))
            .unwrap_or_default();

        Self {
            id: entity.id,
            class_ticket_id: entity.class_ticket_id,
            class_name,
            class_price,
            quantity: entity.quantity,
        }
    }

    pub fn into_dto(self) -> SeatDto {
        SeatDto {
            id: self.id,
            class_ticket_id: self.class_ticket_id,
            class_name: self.class_name,
            class_price: self.class_price,
            quantity: self.quantity,
        }
    }
}

/// Intermediate airport a flight stops at.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub airport_id: i32,
    pub airport_name: String,
    pub time_stop: Option<i32>,
    pub note: Option<String>,
}

impl Stop {
    pub fn from_entity(
        entity: entity::stop_by_airport::Model,
        airport: Option<entity::airport::Model>,
    ) -> Self {
        Self {
            airport_id: entity.airport_id,
            airport_name: airport.map(|a| a.name).unwrap_or_default(),
            time_stop: entity.time_stop,
            note: entity.note,
        }
    }

    pub fn into_dto(self) -> StopDto {
        StopDto {
            airport_id: self.airport_id,
            airport_name: self.airport_name,
            time_stop: self.time_stop,
            note: self.note,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightDetails {
    pub flight: Flight,
    pub seats: Vec<Seat>,
    pub stops: Vec<Stop>,
}

impl FlightDetails {
    pub fn into_dto(self) -> FlightDetailsDto {
        FlightDetailsDto {
            flight: self.flight.into_dto(),
            seats: self.seats.into_iter().map(Seat::into_dto).collect(),
            stops: self.stops.into_iter().map(Stop::into_dto).collect(),
        }
    }
}

/// Criteria of the customer flight search. Absent fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct FlightSearchParams {
    /// Departure airport of the route.
    pub from: Option<i32>,
    /// Arrival airport of the route.
    pub to: Option<i32>,
    /// Calendar day (UTC) the flight departs on.
    pub date: Option<NaiveDate>,
}

impl FlightSearchParams {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none() && self.date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatParam {
    pub class_ticket_id: i32,
    pub quantity: i32,
}

/// Fields shared by flight creation and full update.
#[derive(Debug, Clone)]
pub struct SaveFlightParams {
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub is_active: bool,
    pub image: Option<String>,
    pub plane_id: i32,
    pub flight_route_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub flight: SaveFlightParams,
    /// Initial seat inventory per fare class.
    pub seats: Vec<SeatParam>,
}

impl CreateFlightParams {
    pub fn from_dto(dto: CreateFlightDto) -> Self {
        Self {
            flight: SaveFlightParams {
                name: dto.name,
                start_date: dto.start_date,
                end_date: dto.end_date,
                price: dto.price,
                is_active: dto.is_active,
                image: dto.image,
                plane_id: dto.plane_id,
                flight_route_id: dto.flight_route_id,
            },
            seats: dto
                .seats
                .into_iter()
                .map(|s| SeatParam {
                    class_ticket_id: s.class_ticket_id,
                    quantity: s.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFlightParams {
    pub id: i32,
    pub flight: SaveFlightParams,
}

impl UpdateFlightParams {
    pub fn from_dto(id: i32, dto: UpdateFlightDto) -> Self {
        Self {
            id,
            flight: SaveFlightParams {
                name: dto.name,
                start_date: dto.start_date,
                end_date: dto.end_date,
                price: dto.price,
                is_active: dto.is_active,
                image: dto.image,
                plane_id: dto.plane_id,
                flight_route_id: dto.flight_route_id,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedFlights {
    pub flights: Vec<Flight>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFlights {
    pub fn into_dto(self) -> PaginatedFlightsDto {
        PaginatedFlightsDto {
            flights: self.flights.into_iter().map(Flight::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
