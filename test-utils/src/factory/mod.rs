//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and the
//! `helpers` module builds whole dependency chains when a test only cares about the leaf.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let origin = factory::create_airport(&db).await?;
//!     let destination = factory::create_airport(&db).await?;
//!     let route = factory::create_flight_route(&db, origin.id, destination.id).await?;
//!
//!     // Create with all dependencies
//!     let (route, flight) = factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("admin")
//!     .password("123456")
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//! ```

pub mod airport;
pub mod bill;
pub mod class_ticket;
pub mod flight;
pub mod flight_route;
pub mod helpers;
pub mod plane;
pub mod seat;
pub mod stop_by_airport;
pub mod ticket;
pub mod user;

pub use airport::create_airport;
pub use bill::create_bill;
pub use class_ticket::create_class_ticket;
pub use flight::create_flight;
pub use flight_route::create_flight_route;
pub use plane::create_plane;
pub use seat::create_seat;
pub use stop_by_airport::create_stop;
pub use ticket::create_ticket;
pub use user::create_user;
