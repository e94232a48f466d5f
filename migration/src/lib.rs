pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_airport_table;
mod m20240501_000002_create_plane_table;
mod m20240501_000003_create_flight_route_table;
mod m20240501_000004_create_flight_table;
mod m20240501_000005_create_stop_by_airport_table;
mod m20240501_000006_create_class_ticket_table;
mod m20240501_000007_create_seat_table;
mod m20240502_000008_create_user_table;
mod m20240502_000009_create_bill_table;
mod m20240502_000010_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_airport_table::Migration),
            Box::new(m20240501_000002_create_plane_table::Migration),
            Box::new(m20240501_000003_create_flight_route_table::Migration),
            Box::new(m20240501_000004_create_flight_table::Migration),
            Box::new(m20240501_000005_create_stop_by_airport_table::Migration),
            Box::new(m20240501_000006_create_class_ticket_table::Migration),
            Box::new(m20240501_000007_create_seat_table::Migration),
            Box::new(m20240502_000008_create_user_table::Migration),
            Box::new(m20240502_000009_create_bill_table::Migration),
            Box::new(m20240502_000010_create_ticket_table::Migration),
        ]
    }
}
