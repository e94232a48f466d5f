use super::*;
use entity::sea_orm_active_enums::UserRole;
use serde_json::json;

/// Tests admin routes enforce authentication and the admin role.
///
/// Expected: 401 anonymously, 403 for customers, 200 for admins
#[tokio::test]
async fn guards_admin_routes() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("customer")
        .password("secret")
        .build()
        .await
        .unwrap();
    factory::user::UserFactory::new(db)
        .username("admin")
        .password("123456")
        .role(UserRole::Admin)
        .build()
        .await
        .unwrap();
    let app = app(db).await;

    let response = send(&app, get("/admin/flights", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let customer = login(&app, "customer", "secret").await;
    let response = send(&app, get("/admin/flight-routes", Some(&customer))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = login(&app, "admin", "123456").await;
    let response = send(&app, get("/admin/flights", Some(&admin))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["total"], 0);
}

/// Tests managing routes and flights as an admin.
///
/// Expected: 201 on create, 200 on rename, 204 on delete, 404 afterwards
#[tokio::test]
async fn manages_routes_and_flights() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("admin")
        .password("123456")
        .role(UserRole::Admin)
        .build()
        .await
        .unwrap();
    let start = factory::airport::create_airport(db).await.unwrap();
    let end = factory::airport::create_airport(db).await.unwrap();
    let plane = factory::plane::create_plane(db).await.unwrap();
    let app = app(db).await;
    let admin = login(&app, "admin", "123456").await;

    let response = send(
        &app,
        json(
            "POST",
            "/admin/flight-routes",
            Some(&admin),
            json!({
                "name": "Ho Chi Minh City - Ha Noi",
                "start_airport_id": start.id,
                "end_airport_id": end.id
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let route_id = body_json(response).await["id"].as_i64().unwrap();

    let response = send(
        &app,
        json(
            "POST",
            "/admin/flights",
            Some(&admin),
            json!({
                "name": "VN 101",
                "start_date": "2024-05-20T08:00:00Z",
                "end_date": "2024-05-20T10:00:00Z",
                "price": 1000000.0,
                "plane_id": plane.id,
                "flight_route_id": route_id
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let flight_id = body_json(response).await["flight"]["id"].as_i64().unwrap();

    let uri = format!("/admin/flights/{}", flight_id);
    let response = send(
        &app,
        json("PATCH", &uri, Some(&admin), json!({ "name": "VN 102" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "VN 102");

    let uri = format!("/admin/flight-routes/{}", route_id);
    let response = send(&app, get(&uri, Some(&admin))).await;
    assert_eq!(
        body_json(response).await["flights"],
        json!(["VN 102"])
    );

    let delete = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .header(header::COOKIE, &admin)
        .body(Body::empty())
        .unwrap();
    let response = send(&app, delete).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get(&format!("/admin/flights/{}", flight_id), Some(&admin))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests creating a flight with an unknown fare class.
///
/// Expected: 400 and no flight written
#[tokio::test]
async fn rejects_flight_with_unknown_class() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("admin")
        .password("123456")
        .role(UserRole::Admin)
        .build()
        .await
        .unwrap();
    let (route, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let app = app(db).await;
    let admin = login(&app, "admin", "123456").await;

    let response = send(
        &app,
        json(
            "POST",
            "/admin/flights",
            Some(&admin),
            json!({
                "name": "VN 201",
                "plane_id": flight.plane_id,
                "flight_route_id": route.id,
                "seats": [{ "class_ticket_id": 9999, "quantity": 10 }]
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, get("/admin/flights", Some(&admin))).await;
    assert_eq!(body_json(response).await["total"], 1);
}

/// Tests the public admin index and the revenue statistics.
///
/// Expected: index lists flight counts, stats rejects unknown periods
#[tokio::test]
async fn serves_dashboard() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("admin")
        .password("123456")
        .role(UserRole::Admin)
        .build()
        .await
        .unwrap();
    factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let app = app(db).await;

    let response = send(&app, get("/admin", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let index = body_json(response).await;
    assert!(index["user"].is_null());
    assert_eq!(index["flight_counts"][0]["flight_count"], 1);

    let response = send(&app, get("/admin/stats", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(
        &app,
        form("/admin-login", "username=admin&password=123456"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    let admin = session_cookie(&response);

    let response = send(&app, get("/admin/stats?period=week", Some(&admin))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        get("/admin/stats?year=2024&period=quarter", Some(&admin)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["year"], 2024);
    assert_eq!(stats["period"], "quarter");

    let response = send(
        &app,
        get(
            "/admin/stats?kw=&year=&period=month&flight_route_id=",
            Some(&admin),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["period"], "month");

    let response = send(&app, get("/admin/logout", Some(&admin))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}
