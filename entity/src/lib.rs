pub mod prelude;

pub mod airport;
pub mod bill;
pub mod class_ticket;
pub mod flight;
pub mod flight_route;
pub mod plane;
pub mod seat;
pub mod sea_orm_active_enums;
pub mod stop_by_airport;
pub mod ticket;
pub mod user;
