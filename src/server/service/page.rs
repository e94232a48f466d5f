use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        airport::AirportRepository, flight::FlightRepository, ticket::TicketRepository,
    },
    error::AppError,
    model::{
        flight::FlightSearchParams,
        page::{BookTicketPage, HomePage},
    },
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Flights, tickets and distinct departure dates for the home page
    pub async fn home(&self) -> Result<HomePage, AppError> {
        let flights = FlightRepository::new(self.db).get_all().await?;
        let tickets = TicketRepository::new(self.db).get_all().await?;
        let start_dates = FlightRepository::new(self.db).get_start_dates().await?;

        Ok(HomePage {
            flights,
            tickets,
            start_dates,
        })
    }

    /// Airports for the search form, plus matching flights when criteria are given
    pub async fn book_ticket(
        &self,
        params: FlightSearchParams,
    ) -> Result<BookTicketPage, AppError> {
        let airports = AirportRepository::new(self.db).get_all().await?;

        let flights = if params.is_empty() {
            None
        } else {
            Some(FlightRepository::new(self.db).search(&params).await?)
        };

        Ok(BookTicketPage { airports, flights })
    }
}
