use crate::server::{
    error::AppError, model::flight::FlightSearchParams, service::page::PageService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests the home page aggregate.
///
/// Expected: Ok with every flight and its departure date
#[tokio::test]
async fn builds_home_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let home = PageService::new(db).home().await?;

    assert_eq!(home.flights.len(), 1);
    assert!(home.tickets.is_empty());
    assert_eq!(home.start_dates.len(), 1);
    assert_eq!(home.flights[0].id, flight.id);

    Ok(())
}

/// Tests the booking search page only searches with criteria.
///
/// Expected: flights is None without criteria and Some with them
#[tokio::test]
async fn searches_only_with_criteria() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (start, _end, route) = factory::helpers::create_route_with_airports(db).await?;
    factory::helpers::create_flight_on_route(db, route.id).await?;

    let service = PageService::new(db);

    let page = service.book_ticket(FlightSearchParams::default()).await?;
    assert_eq!(page.airports.len(), 2);
    assert!(page.flights.is_none());

    let page = service
        .book_ticket(FlightSearchParams {
            from: Some(start.id),
            to: None,
            date: None,
        })
        .await?;
    assert_eq!(page.flights.map(|f| f.len()), Some(1));

    Ok(())
}
