use sea_orm::DatabaseConnection;

use crate::server::{
    data::{flight::FlightRepository, flight_route::FlightRouteRepository},
    error::{internal::InternalError, AppError},
    model::flight::{
        CreateFlightParams, Flight, FlightDetails, PaginatedFlights, SaveFlightParams,
        UpdateFlightParams,
    },
    service::{total_pages, MAX_PER_PAGE},
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated flights, optionally filtered by name substring or exact id
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedFlights, AppError> {
        let repo = FlightRepository::new(self.db);
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let (flights, total) = repo.get_paginated(search, page, per_page).await?;

        Ok(PaginatedFlights {
            flights,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightDetails>, AppError> {
        let repo = FlightRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a flight with its seats and returns the full detail view
    pub async fn create(&self, mut params: CreateFlightParams) -> Result<FlightDetails, AppError> {
        params.flight = self.validate(params.flight).await?;

        if params.seats.iter().any(|seat| seat.quantity < 0) {
            return Err(AppError::BadRequest(
                "Seat quantity cannot be negative".to_string(),
            ));
        }

        let repo = FlightRepository::new(self.db);

        for seat in &params.seats {
            if !repo.class_ticket_exists(seat.class_ticket_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Class ticket {} does not exist",
                    seat.class_ticket_id
                )));
            }
        }

        let flight = repo.create(params).await?;

        // Fetch with seats and stops
        let details = repo
            .get_by_id(flight.id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Flight",
                id: flight.id,
            })?;

        Ok(details)
    }

    /// Replaces every editable field. Returns None if the flight doesn't exist
    pub async fn update(&self, mut params: UpdateFlightParams) -> Result<Option<Flight>, AppError> {
        params.flight = self.validate(params.flight).await?;
        let repo = FlightRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Inline name edit. Returns None if the flight doesn't exist
    pub async fn rename(&self, id: i32, name: String) -> Result<Option<Flight>, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Flight name is required".to_string()));
        }

        let repo = FlightRepository::new(self.db);

        Ok(repo.rename(id, name).await?)
    }

    /// Returns false if the flight doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = FlightRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    async fn validate(&self, mut params: SaveFlightParams) -> Result<SaveFlightParams, AppError> {
        params.name = params.name.trim().to_string();

        if params.name.is_empty() {
            return Err(AppError::BadRequest("Flight name is required".to_string()));
        }

        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            if end < start {
                return Err(AppError::BadRequest(
                    "Flight cannot land before it departs".to_string(),
                ));
            }
        }

        if params.price.is_some_and(|price| price < 0.0) {
            return Err(AppError::BadRequest(
                "Flight price cannot be negative".to_string(),
            ));
        }

        if !FlightRouteRepository::new(self.db)
            .exists(params.flight_route_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Flight route {} does not exist",
                params.flight_route_id
            )));
        }

        if !FlightRepository::new(self.db)
            .plane_exists(params.plane_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Plane {} does not exist",
                params.plane_id
            )));
        }

        Ok(params)
    }
}
