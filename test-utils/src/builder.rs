use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Airport, FlightRoute};
///
/// let test = TestBuilder::new()
///     .with_table(Airport)
///     .with_table(FlightRoute)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables describing the flight network.
    ///
    /// Adds, in dependency order:
    /// - Airport
    /// - Plane
    /// - FlightRoute
    /// - Flight
    /// - StopByAirport
    /// - ClassTicket
    /// - Seat
    pub fn with_flight_tables(self) -> Self {
        self.with_table(Airport)
            .with_table(Plane)
            .with_table(FlightRoute)
            .with_table(Flight)
            .with_table(StopByAirport)
            .with_table(ClassTicket)
            .with_table(Seat)
    }

    /// Adds every table of the schema, including users, bills and tickets.
    ///
    /// Equivalent to `with_flight_tables()` followed by User, Bill and Ticket. Use
    /// this for booking and revenue statistics tests.
    pub fn with_booking_tables(self) -> Self {
        self.with_flight_tables()
            .with_table(User)
            .with_table(Bill)
            .with_table(Ticket)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
