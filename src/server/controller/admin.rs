use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        stats::{AdminIndexDto, RevenueStatsDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::{
            stats::{PeriodRevenueParams, RouteFlightCount, StatsPeriod},
            user::User,
        },
        service::stats::StatsService,
        state::AppState,
        util::query::blank_as_none,
    },
};

/// Tag for grouping admin dashboard endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsParams {
    /// Route name substring for the revenue-by-route report
    pub kw: Option<String>,
    /// Year of the revenue-by-period report (default: current year)
    #[serde(default, deserialize_with = "blank_as_none")]
    pub year: Option<i32>,
    /// `month` (default) or `quarter`
    pub period: Option<String>,
    /// Restricts the revenue-by-period report to one route
    #[serde(default, deserialize_with = "blank_as_none")]
    pub flight_route_id: Option<i32>,
}

/// Admin index.
///
/// Public: shows the logged-in user, if any, and the number of flights on every route.
#[utoipa::path(
    get,
    path = "/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin index data", body = AdminIndexDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;
    let flight_counts = StatsService::new(&state.db).flight_counts().await?;

    Ok((
        StatusCode::OK,
        Json(AdminIndexDto {
            user: user.map(User::into_dto),
            flight_counts: flight_counts
                .into_iter()
                .map(RouteFlightCount::into_dto)
                .collect(),
        }),
    ))
}

/// Revenue statistics.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `200 OK` - Revenue by route and by month/quarter of the requested year
/// - `400 Bad Request` - Unknown period
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = ADMIN_TAG,
    params(StatsParams),
    responses(
        (status = 200, description = "Revenue statistics", body = RevenueStatsDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stats(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let period = match params.period.as_deref() {
        Some(period) if !period.trim().is_empty() => period
            .parse::<StatsPeriod>()
            .map_err(AppError::BadRequest)?,
        _ => StatsPeriod::default(),
    };

    let stats = StatsService::new(&state.db)
        .revenue(
            params.kw.as_deref(),
            PeriodRevenueParams {
                year: params.year.unwrap_or_else(|| Utc::now().year()),
                period,
                flight_route_id: params.flight_route_id,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Clears the session and redirects to `/admin`.
#[utoipa::path(
    get,
    path = "/admin/logout",
    tag = ADMIN_TAG,
    responses(
        (status = 303, description = "Redirect to /admin"),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthSession::new(&session).clear().await;
    tracing::info!("User {} logged out of admin", user.id);

    Ok(Redirect::to("/admin"))
}
