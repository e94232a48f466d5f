mod airport;
mod booking;
mod flight;
mod flight_route;
