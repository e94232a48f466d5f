use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TicketDto {
    pub id: i32,
    pub booked_date: DateTime<Utc>,
    pub price: f64,
    pub flight_id: i32,
    pub user_id: i32,
    pub class_ticket_id: i32,
    pub bill_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BookSeatDto {
    pub class_ticket_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreateBookingDto {
    pub flight_id: i32,
    pub seats: Vec<BookSeatDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BillDto {
    pub id: i32,
    pub payer_id: i32,
    pub total_bill: f64,
    pub is_paid: bool,
    pub created_date: DateTime<Utc>,
    pub tickets: Vec<TicketDto>,
}
