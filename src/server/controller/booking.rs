use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BillDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{Bill, CreateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book seats on a flight.
///
/// Creates an unpaid bill with one ticket per requested seat. Each ticket costs the
/// flight price plus the fare class price. Nothing is booked if any class lacks seats.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - The new bill with its tickets
/// - `400 Bad Request` - Empty request, bad quantity, or not enough seats
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Flight doesn't exist
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BillDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let bill = service
        .book(CreateBookingParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(bill.into_dto())))
}

/// Bills of the logged-in user with their tickets, ordered by id.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "User's bills", body = Vec<BillDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bills = BookingService::new(&state.db).get_by_user(user.id).await?;
    let bills: Vec<BillDto> = bills.into_iter().map(Bill::into_dto).collect();

    Ok((StatusCode::OK, Json(bills)))
}

/// Mark one of the logged-in user's bills as paid.
#[utoipa::path(
    post,
    path = "/api/bookings/{bill_id}/pay",
    tag = BOOKING_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    responses(
        (status = 200, description = "Bill paid", body = BillDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_bill(
    State(state): State<AppState>,
    session: Session,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bill = BookingService::new(&state.db).pay(bill_id, user.id).await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}
