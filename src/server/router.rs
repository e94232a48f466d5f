use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, booking, flight, flight_route, home},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Flightbook", description = "Flight search, booking and administration"),
    tags(
        (name = "page", description = "Customer facing page state"),
        (name = "auth", description = "Login, registration and sessions"),
        (name = "booking", description = "Ticket booking and bills"),
        (name = "admin", description = "Admin dashboard and revenue statistics"),
        (name = "flight_route", description = "Flight route management"),
        (name = "flight", description = "Flight management"),
    )
)]
struct ApiDoc;

/// Builds every application route along with the OpenAPI document served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home::index))
        .routes(routes!(home::book_ticket))
        .routes(routes!(auth::login_page, auth::login))
        .routes(routes!(auth::register_page, auth::register))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::admin_login))
        .routes(routes!(auth::get_user))
        .routes(routes!(booking::get_bookings, booking::create_booking))
        .routes(routes!(booking::pay_bill))
        .routes(routes!(admin::index))
        .routes(routes!(admin::stats))
        .routes(routes!(admin::logout))
        .routes(routes!(
            flight_route::get_flight_routes,
            flight_route::create_flight_route
        ))
        .routes(routes!(
            flight_route::get_flight_route_by_id,
            flight_route::update_flight_route,
            flight_route::delete_flight_route
        ))
        .routes(routes!(flight::get_flights, flight::create_flight))
        .routes(routes!(
            flight::get_flight_by_id,
            flight::update_flight,
            flight::rename_flight,
            flight::delete_flight
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
