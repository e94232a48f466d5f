//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs to params, call a service
//! and convert the result back to a DTO or a redirect.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod flight;
pub mod flight_route;
pub mod home;

use serde::Deserialize;
use utoipa::IntoParams;

/// Search and pagination query of the admin listings.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Name substring, or an exact id when numeric
    pub search: Option<String>,
    /// Zero-based page number
    #[serde(default)]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

#[cfg(test)]
mod test;
