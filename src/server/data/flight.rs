//! Flight data repository.
//!
//! Reads for the home page and the customer flight search, plus the admin flight
//! editor: paginated listing, detail view with seats and stops, create, update,
//! rename and delete.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};

use crate::server::{
    data::name_or_id_condition,
    model::flight::{
        CreateFlightParams, Flight, FlightDetails, FlightSearchParams, SaveFlightParams, Seat,
        Stop, UpdateFlightParams,
    },
    util::date::day_range,
};

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all flights ordered by id
    pub async fn get_all(&self) -> Result<Vec<Flight>, DbErr> {
        let flights = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        Ok(flights.into_iter().map(Flight::from_entity).collect())
    }

    /// Gets the distinct non-null departure timestamps, ascending
    pub async fn get_start_dates(&self) -> Result<Vec<DateTime<Utc>>, DbErr> {
        entity::prelude::Flight::find()
            .select_only()
            .column(entity::flight::Column::StartDate)
            .filter(entity::flight::Column::StartDate.is_not_null())
            .distinct()
            .order_by_asc(entity::flight::Column::StartDate)
            .into_tuple::<DateTime<Utc>>()
            .all(self.db)
            .await
    }

    /// Finds flights by route endpoints and departure day, ordered by id.
    ///
    /// Each criterion is optional; with none set every flight matches.
    pub async fn search(&self, params: &FlightSearchParams) -> Result<Vec<Flight>, DbErr> {
        let mut query = entity::prelude::Flight::find().join(
            JoinType::InnerJoin,
            entity::flight::Relation::FlightRoute.def(),
        );

        if let Some(from) = params.from {
            query = query.filter(entity::flight_route::Column::StartAirportId.eq(from));
        }

        if let Some(to) = params.to {
            query = query.filter(entity::flight_route::Column::EndAirportId.eq(to));
        }

        if let Some(date) = params.date {
            // Dates outside chrono's range cannot match any stored flight
            let Some((day_start, day_end)) = day_range(date) else {
                return Ok(Vec::new());
            };

            query = query
                .filter(entity::flight::Column::StartDate.gte(day_start))
                .filter(entity::flight::Column::StartDate.lt(day_end));
        }

        let flights = query
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        Ok(flights.into_iter().map(Flight::from_entity).collect())
    }

    /// Gets a page of flights ordered by id, optionally filtered by name or id.
    ///
    /// # Returns
    /// - `Ok((flights, total))` - The requested page and the total number of matches
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Flight>, u64), DbErr> {
        let mut query = entity::prelude::Flight::find();

        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            query = query.filter(name_or_id_condition(
                entity::flight::Column::Name,
                entity::flight::Column::Id,
                search,
            ));
        }

        let paginator = query
            .order_by_asc(entity::flight::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let flights = paginator.fetch_page(page).await?;

        Ok((
            flights.into_iter().map(Flight::from_entity).collect(),
            total,
        ))
    }

    /// Gets a flight with its seat inventory (by seat id) and stops (by airport id)
    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightDetails>, DbErr> {
        let Some(flight) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let seats = entity::prelude::Seat::find()
            .filter(entity::seat::Column::FlightId.eq(id))
            .find_also_related(entity::prelude::ClassTicket)
            .order_by_asc(entity::seat::Column::Id)
            .all(self.db)
            .await?;

        let stops = entity::prelude::StopByAirport::find()
            .filter(entity::stop_by_airport::Column::FlightId.eq(id))
            .find_also_related(entity::prelude::Airport)
            .order_by_asc(entity::stop_by_airport::Column::AirportId)
            .all(self.db)
            .await?;

        Ok(Some(FlightDetails {
            flight: Flight::from_entity(flight),
            seats: seats
                .into_iter()
                .map(|(seat, class_ticket)| Seat::from_entity(seat, class_ticket))
                .collect(),
            stops: stops
                .into_iter()
                .map(|(stop, airport)| Stop::from_entity(stop, airport))
                .collect(),
        }))
    }

    /// Creates a flight together with its initial seat rows.
    ///
    /// Nothing is written unless every seat row inserts.
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, DbErr> {
        let txn = self.db.begin().await?;

        let mut active_model = <entity::flight::ActiveModel as ActiveModelTrait>::default();
        apply_flight_params(&mut active_model, params.flight);

        let flight = active_model.insert(&txn).await?;

        for seat in params.seats {
            entity::seat::ActiveModel {
                quantity: ActiveValue::Set(seat.quantity),
                class_ticket_id: ActiveValue::Set(seat.class_ticket_id),
                flight_id: ActiveValue::Set(flight.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Flight::from_entity(flight))
    }

    /// Replaces every editable field of a flight.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - Updated flight
    /// - `Ok(None)` - No flight with that id
    pub async fn update(&self, params: UpdateFlightParams) -> Result<Option<Flight>, DbErr> {
        let Some(flight) = entity::prelude::Flight::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::flight::ActiveModel = flight.into();
        apply_flight_params(&mut active_model, params.flight);

        let flight = active_model.update(self.db).await?;

        Ok(Some(Flight::from_entity(flight)))
    }

    /// Changes only the name of a flight
    pub async fn rename(&self, id: i32, name: String) -> Result<Option<Flight>, DbErr> {
        let Some(flight) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::flight::ActiveModel = flight.into();
        active_model.name = ActiveValue::Set(name);

        let flight = active_model.update(self.db).await?;

        Ok(Some(Flight::from_entity(flight)))
    }

    /// Deletes a flight, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn plane_exists(&self, plane_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Plane::find_by_id(plane_id)
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn class_ticket_exists(&self, class_ticket_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::ClassTicket::find_by_id(class_ticket_id)
            .one(self.db)
            .await?
            .is_some())
    }
}

fn apply_flight_params(active_model: &mut entity::flight::ActiveModel, params: SaveFlightParams) {
    active_model.name = ActiveValue::Set(params.name);
    active_model.start_date = ActiveValue::Set(params.start_date);
    active_model.end_date = ActiveValue::Set(params.end_date);
    active_model.price = ActiveValue::Set(params.price);
    active_model.is_active = ActiveValue::Set(params.is_active);
    active_model.image = ActiveValue::Set(params.image);
    active_model.plane_id = ActiveValue::Set(params.plane_id);
    active_model.flight_route_id = ActiveValue::Set(params.flight_route_id);
}
