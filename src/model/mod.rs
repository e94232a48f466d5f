//! Data transfer objects shared by the HTTP layer.
//!
//! Every type here is serialized to or deserialized from a request or response body
//! and documented for the OpenAPI schema.

pub mod api;
pub mod booking;
pub mod flight;
pub mod flight_route;
pub mod page;
pub mod stats;
pub mod user;
