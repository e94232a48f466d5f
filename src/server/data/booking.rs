//! Bill and ticket writes for customer bookings.
//!
//! A booking creates one bill and one ticket per requested seat inside a single
//! transaction. Any failed check rolls the whole booking back, leaving seat
//! inventory untouched.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::booking::{Bill, BookingOutcome, CreateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books seats on a flight for a user.
    ///
    /// Each ticket costs the flight's base price (zero when unset) plus the fare class
    /// price. Seat quantities are decremented and the bill total is the sum of the
    /// ticket prices.
    ///
    /// # Returns
    /// - `Ok(BookingOutcome::Booked(_))` - Bill and tickets committed
    /// - `Ok(_)` - Any other outcome; nothing was written
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let Some(flight) = entity::prelude::Flight::find_by_id(params.flight_id)
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(BookingOutcome::FlightNotFound);
        };

        let now = Utc::now();
        let base_price = flight.price.unwrap_or(0.0);

        let bill = entity::bill::ActiveModel {
            payer_id: ActiveValue::Set(params.user_id),
            total_bill: ActiveValue::Set(0.0),
            is_paid: ActiveValue::Set(false),
            created_date: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut total = 0.0;
        let mut tickets = Vec::new();

        for request in params.seats {
            let seat = entity::prelude::Seat::find()
                .filter(entity::seat::Column::FlightId.eq(flight.id))
                .filter(entity::seat::Column::ClassTicketId.eq(request.class_ticket_id))
                .find_also_related(entity::prelude::ClassTicket)
                .one(&txn)
                .await?;

            let Some((seat, Some(class_ticket))) = seat else {
                txn.rollback().await?;
                return Ok(BookingOutcome::UnknownClass(request.class_ticket_id));
            };

            if seat.quantity < request.quantity {
                txn.rollback().await?;
                return Ok(BookingOutcome::SeatsUnavailable(request.class_ticket_id));
            }

            let remaining = seat.quantity - request.quantity;
            let mut seat_model: entity::seat::ActiveModel = seat.into();
            seat_model.quantity = ActiveValue::Set(remaining);
            seat_model.update(&txn).await?;

            let price = base_price + class_ticket.price;

            for _ in 0..request.quantity {
                let ticket = entity::ticket::ActiveModel {
                    booked_date: ActiveValue::Set(now),
                    price: ActiveValue::Set(price),
                    flight_id: ActiveValue::Set(flight.id),
                    user_id: ActiveValue::Set(params.user_id),
                    class_ticket_id: ActiveValue::Set(class_ticket.id),
                    bill_id: ActiveValue::Set(bill.id),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                total += price;
                tickets.push(ticket);
            }
        }

        let mut bill_model: entity::bill::ActiveModel = bill.into();
        bill_model.total_bill = ActiveValue::Set(total);
        let bill = bill_model.update(&txn).await?;

        txn.commit().await?;

        Ok(BookingOutcome::Booked(Bill::from_entity(bill, tickets)))
    }

    /// Gets a user's bills with their tickets, both ordered by id
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Bill>, DbErr> {
        let bills = entity::prelude::Bill::find()
            .filter(entity::bill::Column::PayerId.eq(user_id))
            .order_by_asc(entity::bill::Column::Id)
            .all(self.db)
            .await?;

        if bills.is_empty() {
            return Ok(Vec::new());
        }

        let bill_ids: Vec<i32> = bills.iter().map(|b| b.id).collect();
        let mut tickets_by_bill: HashMap<i32, Vec<entity::ticket::Model>> = HashMap::new();

        for ticket in entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::BillId.is_in(bill_ids))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?
        {
            tickets_by_bill.entry(ticket.bill_id).or_default().push(ticket);
        }

        Ok(bills
            .into_iter()
            .map(|bill| {
                let tickets = tickets_by_bill.remove(&bill.id).unwrap_or_default();
                Bill::from_entity(bill, tickets)
            })
            .collect())
    }

    /// Marks a bill as paid if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(Some(Bill))` - The paid bill (paying twice is a no-op)
    /// - `Ok(None)` - No such bill for this user
    pub async fn pay(&self, bill_id: i32, user_id: i32) -> Result<Option<Bill>, DbErr> {
        let Some(bill) = entity::prelude::Bill::find_by_id(bill_id)
            .filter(entity::bill::Column::PayerId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let bill = if bill.is_paid {
            bill
        } else {
            let mut bill_model: entity::bill::ActiveModel = bill.into();
            bill_model.is_paid = ActiveValue::Set(true);
            bill_model.update(self.db).await?
        };

        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::BillId.eq(bill.id))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Bill::from_entity(bill, tickets)))
    }
}
