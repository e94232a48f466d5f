//! Ticket factory for creating test ticket entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Identifies the rows a ticket references.
#[derive(Debug, Clone, Copy)]
pub struct TicketRefs {
    pub flight_id: i32,
    pub user_id: i32,
    pub class_ticket_id: i32,
    pub bill_id: i32,
}

/// Creates a ticket of `price` booked now.
pub async fn create_ticket(
    db: &DatabaseConnection,
    refs: TicketRefs,
    price: f64,
) -> Result<entity::ticket::Model, DbErr> {
    entity::ticket::ActiveModel {
        booked_date: ActiveValue::Set(Utc::now()),
        price: ActiveValue::Set(price),
        flight_id: ActiveValue::Set(refs.flight_id),
        user_id: ActiveValue::Set(refs.user_id),
        class_ticket_id: ActiveValue::Set(refs.class_ticket_id),
        bill_id: ActiveValue::Set(refs.bill_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
