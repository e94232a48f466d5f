//! Flight factory for creating test flight entities.
//!
//! This module provides factory methods for creating flight entities with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let flight = FlightFactory::new(&db, route.id, plane.id)
///     .name("Morning flight")
///     .price(Some(1_000_000.0))
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    price: Option<f64>,
    is_active: bool,
    image: Option<String>,
    plane_id: i32,
    flight_route_id: i32,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Flight {id}"`
    /// - start_date: 1 day from now, end_date 2 hours later
    /// - price: `Some(1_000_000.0)`
    /// - is_active: `true`
    /// - image: `None`
    pub fn new(db: &'a DatabaseConnection, flight_route_id: i32, plane_id: i32) -> Self {
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            name: format!("Flight {}", next_id()),
            start_date: Some(start),
            end_date: Some(start + Duration::hours(2)),
            price: Some(1_000_000.0),
            is_active: true,
            image: None,
            plane_id,
            flight_route_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_date(mut self, start_date: Option<DateTime<Utc>>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: Option<DateTime<Utc>>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            price: ActiveValue::Set(self.price),
            is_active: ActiveValue::Set(self.is_active),
            image: ActiveValue::Set(self.image),
            plane_id: ActiveValue::Set(self.plane_id),
            flight_route_id: ActiveValue::Set(self.flight_route_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values on the given route and plane.
pub async fn create_flight(
    db: &DatabaseConnection,
    flight_route_id: i32,
    plane_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, flight_route_id, plane_id)
        .build()
        .await
}
