//! Seat allocation factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a seat allocation of `quantity` seats in a fare class on a flight.
pub async fn create_seat(
    db: &DatabaseConnection,
    flight_id: i32,
    class_ticket_id: i32,
    quantity: i32,
) -> Result<entity::seat::Model, DbErr> {
    entity::seat::ActiveModel {
        quantity: ActiveValue::Set(quantity),
        class_ticket_id: ActiveValue::Set(class_ticket_id),
        flight_id: ActiveValue::Set(flight_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
