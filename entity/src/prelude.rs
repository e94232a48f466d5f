pub use super::airport::Entity as Airport;
pub use super::bill::Entity as Bill;
pub use super::class_ticket::Entity as ClassTicket;
pub use super::flight::Entity as Flight;
pub use super::flight_route::Entity as FlightRoute;
pub use super::plane::Entity as Plane;
pub use super::seat::Entity as Seat;
pub use super::stop_by_airport::Entity as StopByAirport;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
