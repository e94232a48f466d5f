//! Business logic between the controllers and the data layer.
//!
//! Services validate input, orchestrate repository calls and turn domain failures into
//! `AppError`s. Each service borrows the shared database connection.

pub mod booking;
pub mod flight;
pub mod flight_route;
pub mod page;
pub mod stats;
pub mod user;

/// Largest page size accepted by the admin listings.
pub const MAX_PER_PAGE: u64 = 100;

/// Number of pages needed for `total` items, zero when there are none.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}

#[cfg(test)]
mod test;
