//! Booking domain models: bills and the tickets they pay for.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BillDto, CreateBookingDto, TicketDto},
    server::model::flight::SeatParam,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub booked_date: DateTime<Utc>,
    pub price: f64,
    pub flight_id: i32,
    pub user_id: i32,
    pub class_ticket_id: i32,
    pub bill_id: i32,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            booked_date: entity.booked_date,
            price: entity.price,
            flight_id: entity.flight_id,
            user_id: entity.user_id,
            class_ticket_id: entity.class_ticket_id,
            bill_id: entity.bill_id,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            booked_date: self.booked_date,
            price: self.price,
            flight_id: self.flight_id,
            user_id: self.user_id,
            class_ticket_id: self.class_ticket_id,
            bill_id: self.bill_id,
        }
    }
}

/// A bill with the tickets it covers. `total_bill` is the sum of the ticket prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i32,
    pub payer_id: i32,
    pub total_bill: f64,
    pub is_paid: bool,
    pub created_date: DateTime<Utc>,
    pub tickets: Vec<Ticket>,
}

impl Bill {
    pub fn from_entity(entity: entity::bill::Model, tickets: Vec<entity::ticket::Model>) -> Self {
        Self {
            id: entity.id,
            payer_id: entity.payer_id,
            total_bill: entity.total_bill,
            is_paid: entity.is_paid,
            created_date: entity.created_date,
            tickets: tickets.into_iter().map(Ticket::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> BillDto {
        BillDto {
            id: self.id,
            payer_id: self.payer_id,
            total_bill: self.total_bill,
            is_paid: self.is_paid,
            created_date: self.created_date,
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
        }
    }
}

/// A booking request: one ticket per requested seat, all on the same flight.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: i32,
    pub flight_id: i32,
    pub seats: Vec<SeatParam>,
}

impl CreateBookingParams {
    pub fn from_dto(user_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            user_id,
            flight_id: dto.flight_id,
            seats: dto
                .seats
                .into_iter()
                .map(|s| SeatParam {
                    class_ticket_id: s.class_ticket_id,
                    quantity: s.quantity,
                })
                .collect(),
        }
    }
}

/// Result of attempting to write a booking.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked(Bill),
    FlightNotFound,
    /// The flight has no seat row for this fare class.
    UnknownClass(i32),
    /// Fewer seats remain in this fare class than were requested.
    SeatsUnavailable(i32),
}
