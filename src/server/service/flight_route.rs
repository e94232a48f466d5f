use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, flight_route::FlightRouteRepository},
    error::AppError,
    model::flight_route::{FlightRoute, PaginatedFlightRoutes, SaveFlightRouteParams},
    service::{total_pages, MAX_PER_PAGE},
};

pub struct FlightRouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRouteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated flight routes, optionally filtered by name substring or exact id
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedFlightRoutes, AppError> {
        let repo = FlightRouteRepository::new(self.db);
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let (flight_routes, total) = repo.get_paginated(search, page, per_page).await?;

        Ok(PaginatedFlightRoutes {
            flight_routes,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightRoute>, AppError> {
        let repo = FlightRouteRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn create(&self, params: SaveFlightRouteParams) -> Result<FlightRoute, AppError> {
        let params = self.validate(params).await?;
        let repo = FlightRouteRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Updates a route. Returns None if the route doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: SaveFlightRouteParams,
    ) -> Result<Option<FlightRoute>, AppError> {
        let params = self.validate(params).await?;
        let repo = FlightRouteRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }

    /// Deletes a route and, through cascading keys, its flights.
    /// Returns false if the route doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = FlightRouteRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    /// Trims the name and checks both endpoints exist and differ
    async fn validate(
        &self,
        mut params: SaveFlightRouteParams,
    ) -> Result<SaveFlightRouteParams, AppError> {
        params.name = params.name.trim().to_string();

        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Flight route name is required".to_string(),
            ));
        }

        if params.start_airport_id == params.end_airport_id {
            return Err(AppError::BadRequest(
                "Start and end airports must differ".to_string(),
            ));
        }

        let airport_repo = AirportRepository::new(self.db);
        for airport_id in [params.start_airport_id, params.end_airport_id] {
            if !airport_repo.exists(airport_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Airport {} does not exist",
                    airport_id
                )));
            }
        }

        Ok(params)
    }
}
