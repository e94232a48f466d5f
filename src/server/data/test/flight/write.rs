use super::*;

/// Tests creating a flight with seat inventory.
///
/// Expected: Ok with the flight stored and one seat row per class
#[tokio::test]
async fn creates_flight_with_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, route) = factory::helpers::create_route_with_airports(db).await?;
    let plane = factory::plane::create_plane(db).await?;
    let class_ticket = factory::class_ticket::create_class_ticket(db).await?;

    let flight = FlightRepository::new(db)
        .create(CreateFlightParams {
            flight: save_params(route.id, plane.id, "Ho Chi Minh City - Ca Mau"),
            seats: vec![SeatParam {
                class_ticket_id: class_ticket.id,
                quantity: 40,
            }],
        })
        .await?;

    assert_eq!(flight.name, "Ho Chi Minh City - Ca Mau");
    assert_eq!(flight.flight_route_id, route.id);

    let seats = entity::prelude::Seat::find()
        .filter(entity::seat::Column::FlightId.eq(flight.id))
        .all(db)
        .await?;
    assert_eq!(seats.len(), 1);
    assert_eq!(seats[0].quantity, 40);

    Ok(())
}

/// Tests a failing seat insert rolls back the flight row.
///
/// Expected: Err from the foreign key and no flight stored
#[tokio::test]
async fn create_rolls_back_on_seat_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, route) = factory::helpers::create_route_with_airports(db).await?;
    let plane = factory::plane::create_plane(db).await?;
    let class_ticket = factory::class_ticket::create_class_ticket(db).await?;

    let result = FlightRepository::new(db)
        .create(CreateFlightParams {
            flight: save_params(route.id, plane.id, "Ho Chi Minh City - Ca Mau"),
            seats: vec![
                SeatParam {
                    class_ticket_id: class_ticket.id,
                    quantity: 40,
                },
                SeatParam {
                    class_ticket_id: class_ticket.id + 1,
                    quantity: 10,
                },
            ],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Flight::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Seat::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating and renaming a flight.
///
/// Expected: Ok(Some) with the new values, Ok(None) for unknown ids
#[tokio::test]
async fn updates_and_renames_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let repo = FlightRepository::new(db);

    let mut params = save_params(route.id, flight.plane_id, "Updated");
    params.price = Some(2_500_000.0);
    params.is_active = false;

    let updated = repo
        .update(UpdateFlightParams {
            id: flight.id,
            flight: params.clone(),
        })
        .await?
        .unwrap();
    assert_eq!(updated.name, "Updated");
    assert_eq!(updated.price, Some(2_500_000.0));
    assert!(!updated.is_active);

    let renamed = repo
        .rename(flight.id, "Renamed".to_string())
        .await?
        .unwrap();
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.price, Some(2_500_000.0));

    assert!(repo
        .update(UpdateFlightParams {
            id: 999999,
            flight: params,
        })
        .await?
        .is_none());
    assert!(repo.rename(999999, "Nope".to_string()).await?.is_none());

    Ok(())
}

/// Tests deleting a flight removes its seats.
///
/// Expected: Ok(true) with seats cascaded, Ok(false) on the second delete
#[tokio::test]
async fn deletes_flight_and_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let class_ticket = factory::class_ticket::create_class_ticket(db).await?;
    factory::seat::create_seat(db, flight.id, class_ticket.id, 10).await?;

    let repo = FlightRepository::new(db);

    assert!(repo.delete(flight.id).await?);
    assert!(entity::prelude::Flight::find_by_id(flight.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Seat::find().count(db).await?, 0);

    assert!(!repo.delete(flight.id).await?);

    Ok(())
}

/// Tests the plane existence check.
///
/// Expected: true for a stored plane, false otherwise
#[tokio::test]
async fn checks_plane_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plane = factory::plane::create_plane(db).await?;
    let repo = FlightRepository::new(db);

    assert!(repo.plane_exists(plane.id).await?);
    assert!(!repo.plane_exists(plane.id + 1).await?);

    Ok(())
}

/// Tests the class ticket existence check.
///
/// Expected: true for a stored class, false otherwise
#[tokio::test]
async fn checks_class_ticket_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class_ticket = factory::class_ticket::create_class_ticket(db).await?;
    let repo = FlightRepository::new(db);

    assert!(repo.class_ticket_exists(class_ticket.id).await?);
    assert!(!repo.class_ticket_exists(class_ticket.id + 1).await?);

    Ok(())
}
