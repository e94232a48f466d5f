//! Flight route data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::name_or_id_condition,
    model::flight_route::{FlightRoute, SaveFlightRouteParams},
};

pub struct FlightRouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRouteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new flight route; it has no flights yet
    pub async fn create(&self, params: SaveFlightRouteParams) -> Result<FlightRoute, DbErr> {
        let route = entity::flight_route::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_airport_id: ActiveValue::Set(params.start_airport_id),
            end_airport_id: ActiveValue::Set(params.end_airport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FlightRoute::from_entity(route, Vec::new()))
    }

    /// Gets a flight route with the names of its flights
    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightRoute>, DbErr> {
        let Some(route) = entity::prelude::FlightRoute::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut flight_names = self.flight_names_by_route(vec![id]).await?;
        let flights = flight_names.remove(&id).unwrap_or_default();

        Ok(Some(FlightRoute::from_entity(route, flights)))
    }

    /// Gets a page of flight routes ordered by id, optionally filtered by name or id
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<FlightRoute>, u64), DbErr> {
        let mut query = entity::prelude::FlightRoute::find();

        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            query = query.filter(name_or_id_condition(
                entity::flight_route::Column::Name,
                entity::flight_route::Column::Id,
                search,
            ));
        }

        let paginator = query
            .order_by_asc(entity::flight_route::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let routes = paginator.fetch_page(page).await?;

        // Fetch flight names for the whole page in one query
        let route_ids: Vec<i32> = routes.iter().map(|r| r.id).collect();
        let mut flight_names = self.flight_names_by_route(route_ids).await?;

        let routes = routes
            .into_iter()
            .map(|route| {
                let flights = flight_names.remove(&route.id).unwrap_or_default();
                FlightRoute::from_entity(route, flights)
            })
            .collect();

        Ok((routes, total))
    }

    /// Updates a route's name and endpoints
    pub async fn update(
        &self,
        id: i32,
        params: SaveFlightRouteParams,
    ) -> Result<Option<FlightRoute>, DbErr> {
        let Some(route) = entity::prelude::FlightRoute::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::flight_route::ActiveModel = route.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.start_airport_id = ActiveValue::Set(params.start_airport_id);
        active_model.end_airport_id = ActiveValue::Set(params.end_airport_id);

        active_model.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Deletes a flight route, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FlightRoute::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::FlightRoute::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Maps route id to the names of its flights, ordered by flight id
    async fn flight_names_by_route(
        &self,
        route_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if route_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let flights = entity::prelude::Flight::find()
            .filter(entity::flight::Column::FlightRouteId.is_in(route_ids))
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        let mut names: HashMap<i32, Vec<String>> = HashMap::new();
        for flight in flights {
            names
                .entry(flight.flight_route_id)
                .or_default()
                .push(flight.name);
        }

        Ok(names)
    }
}
