//! Request-level tests running the full router with a real session layer.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, startup, state::AppState};

mod admin;
mod booking;

async fn app(db: &DatabaseConnection) -> Router {
    let session = startup::connect_to_session(db).await.unwrap();

    router()
        .with_state(AppState::new(db.clone()))
        .layer(session)
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// The `name=value` pair of the session cookie set by a response.
fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .unwrap_or_default()
        .to_string()
}

/// Logs in through the login form and returns the session cookie.
async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        form(
            "/login",
            &format!("username={}&password={}", username, password),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    session_cookie(&response)
}

/// Tests the public pages and API document respond.
///
/// Expected: 200 with page state JSON
#[tokio::test]
async fn serves_public_pages() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (route, _flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let app = app(db).await;

    let response = send(&app, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let home = body_json(response).await;
    assert_eq!(home["flights"].as_array().map(Vec::len), Some(1));

    let response = send(&app, get("/book_ticket", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["airports"].as_array().map(Vec::len), Some(2));
    assert!(page["flights"].is_null());

    let uri = format!("/book_ticket?from={}", route.start_airport_id);
    let page = body_json(send(&app, get(&uri, None)).await).await;
    assert_eq!(page["flights"].as_array().map(Vec::len), Some(1));

    let response = send(&app, get("/book_ticket?from=&to=&date=", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["flights"].is_null());

    let response = send(&app, get("/api/docs/openapi.json", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
