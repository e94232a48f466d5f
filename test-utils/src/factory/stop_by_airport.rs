//! Stop factory for creating intermediate stops of a flight.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a stop of `time_stop` minutes at `airport_id` for `flight_id`.
pub async fn create_stop(
    db: &DatabaseConnection,
    flight_id: i32,
    airport_id: i32,
    time_stop: i32,
) -> Result<entity::stop_by_airport::Model, DbErr> {
    entity::stop_by_airport::ActiveModel {
        flight_id: ActiveValue::Set(flight_id),
        airport_id: ActiveValue::Set(airport_id),
        time_stop: ActiveValue::Set(Some(time_stop)),
        note: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
