use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        flight::{
            CreateFlightDto, FlightDetailsDto, FlightDto, PaginatedFlightsDto, RenameFlightDto,
            UpdateFlightDto,
        },
    },
    server::{
        controller::ListParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::flight::{CreateFlightParams, UpdateFlightParams},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Get paginated flights.
///
/// `search` matches a name substring, or the exact id when numeric.
///
/// # Access Control
/// - `Admin` - Only admins can manage flights
#[utoipa::path(
    get,
    path = "/admin/flights",
    tag = FLIGHT_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Successfully retrieved flights", body = PaginatedFlightsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flights(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightService::new(&state.db);

    let flights = service
        .get_paginated(params.search.as_deref(), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(flights.into_dto())))
}

/// Create a flight with its initial seat inventory.
///
/// # Returns
/// - `201 Created` - The flight with its seats
/// - `400 Bad Request` - Empty name, unknown route or plane, negative price or quantity,
///   or landing before departure
#[utoipa::path(
    post,
    path = "/admin/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = FlightDetailsDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightService::new(&state.db);

    let flight = service.create(CreateFlightParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Get a flight with its seats and stops.
#[utoipa::path(
    get,
    path = "/admin/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight", body = FlightDetailsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightService::new(&state.db);

    match service.get_by_id(flight_id).await? {
        Some(flight) => Ok((StatusCode::OK, Json(flight.into_dto()))),
        None => Err(AppError::NotFound("Flight not found".to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/admin/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    request_body = UpdateFlightDto,
    responses(
        (status = 200, description = "Successfully updated flight", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    session: Session,
    Path(flight_id): Path<i32>,
    Json(payload): Json<UpdateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightService::new(&state.db);

    match service
        .update(UpdateFlightParams::from_dto(flight_id, payload))
        .await?
    {
        Some(flight) => Ok((StatusCode::OK, Json(flight.into_dto()))),
        None => Err(AppError::NotFound("Flight not found".to_string())),
    }
}

/// Rename a flight from the inline editor of the flight list.
#[utoipa::path(
    patch,
    path = "/admin/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    request_body = RenameFlightDto,
    responses(
        (status = 200, description = "Successfully renamed flight", body = FlightDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_flight(
    State(state): State<AppState>,
    session: Session,
    Path(flight_id): Path<i32>,
    Json(payload): Json<RenameFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightService::new(&state.db);

    match service.rename(flight_id, payload.name).await? {
        Some(flight) => Ok((StatusCode::OK, Json(flight.into_dto()))),
        None => Err(AppError::NotFound("Flight not found".to_string())),
    }
}

/// Delete a flight together with its seats, stops and tickets.
#[utoipa::path(
    delete,
    path = "/admin/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted flight"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    session: Session,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightService::new(&state.db);

    if service.delete(flight_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Flight not found".to_string()))
    }
}
