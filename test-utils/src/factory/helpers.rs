//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a flight route between two fresh airports.
///
/// # Returns
/// - `Ok((start, end, route))` - The two airports and the route joining them
/// - `Err(DbErr)` - Database error during creation
pub async fn create_route_with_airports(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::airport::Model,
        entity::airport::Model,
        entity::flight_route::Model,
    ),
    DbErr,
> {
    let start = crate::factory::airport::create_airport(db).await?;
    let end = crate::factory::airport::create_airport(db).await?;
    let route = crate::factory::flight_route::create_flight_route(db, start.id, end.id).await?;

    Ok((start, end, route))
}

/// Creates a flight with all of its dependencies.
///
/// Creates two airports, a route between them, a plane and a flight on that
/// route with default values.
///
/// # Returns
/// - `Ok((route, flight))` - The created route and flight
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::flight_route::Model, entity::flight::Model), DbErr> {
    let (_, _, route) = create_route_with_airports(db).await?;
    let plane = crate::factory::plane::create_plane(db).await?;
    let flight = crate::factory::flight::create_flight(db, route.id, plane.id).await?;

    Ok((route, flight))
}

/// Creates a flight on an existing route, with a fresh plane.
///
/// # Returns
/// - `Ok(flight)` - The created flight
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_on_route(
    db: &DatabaseConnection,
    flight_route_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    let plane = crate::factory::plane::create_plane(db).await?;
    crate::factory::flight::create_flight(db, flight_route_id, plane.id).await
}
