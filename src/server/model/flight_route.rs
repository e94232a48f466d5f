//! Flight route domain models and parameters.

use crate::model::flight_route::{FlightRouteDto, PaginatedFlightRoutesDto, SaveFlightRouteDto};

/// Origin and destination airport pair, with the names of the flights operating it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRoute {
    pub id: i32,
    pub name: String,
    pub start_airport_id: i32,
    pub end_airport_id: i32,
    pub flights: Vec<String>,
}

impl FlightRoute {
    pub fn from_entity(entity: entity::flight_route::Model, flights: Vec<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_airport_id: entity.start_airport_id,
            end_airport_id: entity.end_airport_id,
            flights,
        }
    }

    pub fn into_dto(self) -> FlightRouteDto {
        FlightRouteDto {
            id: self.id,
            name: self.name,
            start_airport_id: self.start_airport_id,
            end_airport_id: self.end_airport_id,
            flights: self.flights,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveFlightRouteParams {
    pub name: String,
    pub start_airport_id: i32,
    pub end_airport_id: i32,
}

impl SaveFlightRouteParams {
    pub fn from_dto(dto: SaveFlightRouteDto) -> Self {
        Self {
            name: dto.name,
            start_airport_id: dto.start_airport_id,
            end_airport_id: dto.end_airport_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedFlightRoutes {
    pub flight_routes: Vec<FlightRoute>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFlightRoutes {
    pub fn into_dto(self) -> PaginatedFlightRoutesDto {
        PaginatedFlightRoutesDto {
            flight_routes: self
                .flight_routes
                .into_iter()
                .map(FlightRoute::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
