use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::booking::{Bill, BookingOutcome, CreateBookingParams},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books the requested seats and returns the unpaid bill
    pub async fn book(&self, params: CreateBookingParams) -> Result<Bill, AppError> {
        if params.seats.is_empty() {
            return Err(AppError::BadRequest(
                "At least one seat must be booked".to_string(),
            ));
        }

        if params.seats.iter().any(|seat| seat.quantity <= 0) {
            return Err(AppError::BadRequest(
                "Seat quantity must be positive".to_string(),
            ));
        }

        let repo = BookingRepository::new(self.db);
        let flight_id = params.flight_id;

        match repo.create(params).await? {
            BookingOutcome::Booked(bill) => {
                tracing::info!(
                    "Bill {} created for flight {} with {} tickets",
                    bill.id,
                    flight_id,
                    bill.tickets.len()
                );
                Ok(bill)
            }
            BookingOutcome::FlightNotFound => Err(AppError::NotFound(format!(
                "Flight {} not found",
                flight_id
            ))),
            BookingOutcome::UnknownClass(class_ticket_id) => Err(AppError::BadRequest(format!(
                "Flight {} has no seats in class {}",
                flight_id, class_ticket_id
            ))),
            BookingOutcome::SeatsUnavailable(class_ticket_id) => {
                Err(AppError::BadRequest(format!(
                    "Not enough seats left in class {}",
                    class_ticket_id
                )))
            }
        }
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Bill>, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Pays a bill owned by the user
    pub async fn pay(&self, bill_id: i32, user_id: i32) -> Result<Bill, AppError> {
        let repo = BookingRepository::new(self.db);

        repo.pay(bill_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bill {} not found", bill_id)))
    }
}
