//! Flight route factory for creating test route entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flight routes between two existing airports.
///
/// # Example
///
/// ```rust,ignore
/// let route = FlightRouteFactory::new(&db, origin.id, destination.id)
///     .name("Ho Chi Minh City - Ha Noi")
///     .build()
///     .await?;
/// ```
pub struct FlightRouteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_airport_id: i32,
    end_airport_id: i32,
}

impl<'a> FlightRouteFactory<'a> {
    /// Creates a new FlightRouteFactory named `"Route {id}"`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `start_airport_id` - Departure airport
    /// - `end_airport_id` - Arrival airport
    pub fn new(db: &'a DatabaseConnection, start_airport_id: i32, end_airport_id: i32) -> Self {
        Self {
            db,
            name: format!("Route {}", next_id()),
            start_airport_id,
            end_airport_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::flight_route::Model, DbErr> {
        entity::flight_route::ActiveModel {
            name: ActiveValue::Set(self.name),
            start_airport_id: ActiveValue::Set(self.start_airport_id),
            end_airport_id: ActiveValue::Set(self.end_airport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a route with default name between the given airports.
pub async fn create_flight_route(
    db: &DatabaseConnection,
    start_airport_id: i32,
    end_airport_id: i32,
) -> Result<entity::flight_route::Model, DbErr> {
    FlightRouteFactory::new(db, start_airport_id, end_airport_id)
        .build()
        .await
}
