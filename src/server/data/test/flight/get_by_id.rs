use super::*;

/// Tests loading a flight with its seats and stops.
///
/// Expected: Ok(Some) with class names, prices and stop airport names resolved
#[tokio::test]
async fn loads_seats_and_stops() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let first = factory::class_ticket::ClassTicketFactory::new(db)
        .name("First class")
        .price(2_000_000.0)
        .build()
        .await?;
    let second = factory::class_ticket::ClassTicketFactory::new(db)
        .name("Second class")
        .price(1_000_000.0)
        .build()
        .await?;
    factory::seat::create_seat(db, flight.id, first.id, 25).await?;
    factory::seat::create_seat(db, flight.id, second.id, 75).await?;

    let stopover = factory::airport::AirportFactory::new(db)
        .name("Cam Ranh International Airport")
        .build()
        .await?;
    factory::stop_by_airport::create_stop(db, flight.id, stopover.id, 30).await?;

    let details = FlightRepository::new(db)
        .get_by_id(flight.id)
        .await?
        .unwrap();

    assert_eq!(details.flight.id, flight.id);
    assert_eq!(details.seats.len(), 2);
    assert_eq!(details.seats[0].class_name, "First class");
    assert_eq!(details.seats[0].class_price, 2_000_000.0);
    assert_eq!(details.seats[0].quantity, 25);
    assert_eq!(details.seats[1].quantity, 75);
    assert_eq!(details.stops.len(), 1);
    assert_eq!(details.stops[0].airport_name, "Cam Ranh International Airport");
    assert_eq!(details.stops[0].time_stop, Some(30));

    Ok(())
}

/// Tests loading an unknown flight.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let details = FlightRepository::new(db).get_by_id(999999).await?;

    assert!(details.is_none());

    Ok(())
}
