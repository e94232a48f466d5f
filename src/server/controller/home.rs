use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        page::{BookTicketDto, HomeDto},
    },
    server::{
        error::AppError, model::flight::FlightSearchParams, service::page::PageService,
        state::AppState, util::query::blank_as_none,
    },
};

/// Tag for grouping customer page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookTicketParams {
    /// Departure airport id
    #[serde(default, deserialize_with = "blank_as_none")]
    pub from: Option<i32>,
    /// Arrival airport id
    #[serde(default, deserialize_with = "blank_as_none")]
    pub to: Option<i32>,
    /// Departure day, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
}

/// Home page data: all flights, all tickets and the distinct departure dates.
#[utoipa::path(
    get,
    path = "/",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Home page data", body = HomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let home = PageService::new(&state.db).home().await?;

    Ok((StatusCode::OK, Json(home.into_dto())))
}

/// Ticket search page.
///
/// Always returns the airports for the search form. When any of `from`, `to` or
/// `date` is given, also returns the matching flights ordered by id.
#[utoipa::path(
    get,
    path = "/book_ticket",
    tag = PAGE_TAG,
    params(BookTicketParams),
    responses(
        (status = 200, description = "Search page data", body = BookTicketDto),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_ticket(
    State(state): State<AppState>,
    Query(params): Query<BookTicketParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(&state.db)
        .book_ticket(FlightSearchParams {
            from: params.from,
            to: params.to,
            date: params.date,
        })
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}
