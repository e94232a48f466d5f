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
        flight_route::{FlightRouteDto, PaginatedFlightRoutesDto, SaveFlightRouteDto},
    },
    server::{
        controller::ListParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::flight_route::SaveFlightRouteParams,
        service::flight_route::FlightRouteService,
        state::AppState,
    },
};

/// Tag for grouping flight route endpoints in OpenAPI documentation
pub static FLIGHT_ROUTE_TAG: &str = "flight_route";

/// Get paginated flight routes.
///
/// Each route lists the names of its flights. `search` matches a name substring, or
/// the exact id when numeric.
///
/// # Access Control
/// - `Admin` - Only admins can manage flight routes
#[utoipa::path(
    get,
    path = "/admin/flight-routes",
    tag = FLIGHT_ROUTE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Successfully retrieved flight routes", body = PaginatedFlightRoutesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_routes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightRouteService::new(&state.db);

    let routes = service
        .get_paginated(params.search.as_deref(), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(routes.into_dto())))
}

/// Create a flight route.
///
/// # Returns
/// - `201 Created` - Successfully created route
/// - `400 Bad Request` - Empty name, unknown airport, or identical start and end airports
#[utoipa::path(
    post,
    path = "/admin/flight-routes",
    tag = FLIGHT_ROUTE_TAG,
    request_body = SaveFlightRouteDto,
    responses(
        (status = 201, description = "Successfully created flight route", body = FlightRouteDto),
        (status = 400, description = "Invalid flight route data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight_route(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveFlightRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightRouteService::new(&state.db);

    let route = service
        .create(SaveFlightRouteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(route.into_dto())))
}

#[utoipa::path(
    get,
    path = "/admin/flight-routes/{flight_route_id}",
    tag = FLIGHT_ROUTE_TAG,
    params(
        ("flight_route_id" = i32, Path, description = "Flight route ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight route", body = FlightRouteDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_route_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(flight_route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightRouteService::new(&state.db);

    match service.get_by_id(flight_route_id).await? {
        Some(route) => Ok((StatusCode::OK, Json(route.into_dto()))),
        None => Err(AppError::NotFound("Flight route not found".to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/admin/flight-routes/{flight_route_id}",
    tag = FLIGHT_ROUTE_TAG,
    params(
        ("flight_route_id" = i32, Path, description = "Flight route ID")
    ),
    request_body = SaveFlightRouteDto,
    responses(
        (status = 200, description = "Successfully updated flight route", body = FlightRouteDto),
        (status = 400, description = "Invalid flight route data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight_route(
    State(state): State<AppState>,
    session: Session,
    Path(flight_route_id): Path<i32>,
    Json(payload): Json<SaveFlightRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightRouteService::new(&state.db);

    match service
        .update(flight_route_id, SaveFlightRouteParams::from_dto(payload))
        .await?
    {
        Some(route) => Ok((StatusCode::OK, Json(route.into_dto()))),
        None => Err(AppError::NotFound("Flight route not found".to_string())),
    }
}

/// Delete a flight route together with its flights.
#[utoipa::path(
    delete,
    path = "/admin/flight-routes/{flight_route_id}",
    tag = FLIGHT_ROUTE_TAG,
    params(
        ("flight_route_id" = i32, Path, description = "Flight route ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted flight route"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Flight route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight_route(
    State(state): State<AppState>,
    session: Session,
    Path(flight_route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FlightRouteService::new(&state.db);

    if service.delete(flight_route_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Flight route not found".to_string()))
    }
}
