use super::*;
use serde_json::json;

/// Tests booking and paying through the API.
///
/// Expected: 401 anonymously, 201 with the bill when logged in, then paid
#[tokio::test]
async fn books_and_pays() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("vana")
        .password("secret")
        .build()
        .await
        .unwrap();
    let (_route, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let class_ticket = factory::class_ticket::create_class_ticket(db).await.unwrap();
    factory::seat::create_seat(db, flight.id, class_ticket.id, 10)
        .await
        .unwrap();
    let app = app(db).await;

    let payload = json!({
        "flight_id": flight.id,
        "seats": [{ "class_ticket_id": class_ticket.id, "quantity": 2 }]
    });

    let response = send(&app, json("POST", "/api/bookings", None, payload.clone())).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = login(&app, "vana", "secret").await;

    let response = send(&app, json("POST", "/api/bookings", Some(&cookie), payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let bill = body_json(response).await;
    assert_eq!(bill["tickets"].as_array().map(Vec::len), Some(2));
    assert_eq!(bill["is_paid"], false);

    let bill_id = bill["id"].as_i64().unwrap();
    let uri = format!("/api/bookings/{}/pay", bill_id);
    let response = send(&app, json("POST", &uri, Some(&cookie), json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["is_paid"], true);

    let response = send(&app, get("/api/bookings", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(1));
}
