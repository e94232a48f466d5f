//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All queries,
//! inserts, updates and deletes are performed through these repositories.

pub mod airport;
pub mod booking;
pub mod flight;
pub mod flight_route;
pub mod stats;
pub mod ticket;
pub mod user;

use sea_orm::{ColumnTrait, Condition};

/// Builds the admin list search filter: a name substring match, or an exact id match
/// when the search term parses as an integer.
pub(crate) fn name_or_id_condition<C: ColumnTrait>(name: C, id: C, search: &str) -> Condition {
    let search = search.trim();
    let mut condition = Condition::any().add(name.contains(search));

    if let Ok(id_value) = search.parse::<i32>() {
        condition = condition.add(id.eq(id_value));
    }

    condition
}

#[cfg(test)]
mod test;
