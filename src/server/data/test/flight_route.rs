use crate::server::{data::flight_route::FlightRouteRepository, model::flight_route::SaveFlightRouteParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a route and reading it back with its flights.
///
/// Expected: Ok with the flight names of the route, ordered by flight id
#[tokio::test]
async fn creates_and_gets_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = factory::airport::create_airport(db).await?;
    let end = factory::airport::create_airport(db).await?;

    let repo = FlightRouteRepository::new(db);
    let route = repo
        .create(SaveFlightRouteParams {
            name: "Ho Chi Minh City - Ha Noi".to_string(),
            start_airport_id: start.id,
            end_airport_id: end.id,
        })
        .await?;
    assert!(route.flights.is_empty());

    let plane = factory::plane::create_plane(db).await?;
    factory::flight::FlightFactory::new(db, route.id, plane.id)
        .name("VN 101")
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, route.id, plane.id)
        .name("VN 102")
        .build()
        .await?;

    let fetched = repo.get_by_id(route.id).await?.unwrap();
    assert_eq!(fetched.name, "Ho Chi Minh City - Ha Noi");
    assert_eq!(fetched.start_airport_id, start.id);
    assert_eq!(fetched.flights, vec!["VN 101".to_string(), "VN 102".to_string()]);

    assert!(repo.get_by_id(999999).await?.is_none());
    assert!(repo.exists(route.id).await?);
    assert!(!repo.exists(999999).await?);

    Ok(())
}

/// Tests paging through routes with a name filter.
///
/// Expected: Ok with matching routes and their flights attached
#[tokio::test]
async fn paginates_routes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = factory::airport::create_airport(db).await?;
    let end = factory::airport::create_airport(db).await?;

    let hcm = factory::flight_route::FlightRouteFactory::new(db, start.id, end.id)
        .name("Ho Chi Minh City - Ca Mau")
        .build()
        .await?;
    factory::flight_route::FlightRouteFactory::new(db, end.id, start.id)
        .name("Hai Phong - Ha Noi")
        .build()
        .await?;
    factory::helpers::create_flight_on_route(db, hcm.id).await?;

    let repo = FlightRouteRepository::new(db);

    let (routes, total) = repo.get_paginated(None, 0, 1).await?;
    assert_eq!(total, 2);
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].id, hcm.id);
    assert_eq!(routes[0].flights.len(), 1);

    let (routes, total) = repo.get_paginated(Some("Ha Noi"), 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(routes[0].name, "Hai Phong - Ha Noi");
    assert!(routes[0].flights.is_empty());

    let (routes, total) = repo.get_paginated(None, 5, 10).await?;
    assert_eq!(total, 2);
    assert!(routes.is_empty());

    Ok(())
}

/// Tests updating a route.
///
/// Expected: Ok(Some) with new values, Ok(None) for unknown ids
#[tokio::test]
async fn updates_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (start, end, route) = factory::helpers::create_route_with_airports(db).await?;
    let repo = FlightRouteRepository::new(db);

    let params = SaveFlightRouteParams {
        name: "Reversed".to_string(),
        start_airport_id: end.id,
        end_airport_id: start.id,
    };

    let updated = repo.update(route.id, params.clone()).await?.unwrap();
    assert_eq!(updated.name, "Reversed");
    assert_eq!(updated.start_airport_id, end.id);
    assert_eq!(updated.end_airport_id, start.id);

    assert!(repo.update(999999, params).await?.is_none());

    Ok(())
}

/// Tests deleting a route removes its flights.
///
/// Expected: Ok(true) and no flights left, Ok(false) once gone
#[tokio::test]
async fn deletes_route_and_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, _flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let repo = FlightRouteRepository::new(db);

    assert!(repo.delete(route.id).await?);
    assert_eq!(entity::prelude::Flight::find().count(db).await?, 0);

    assert!(!repo.delete(route.id).await?);

    Ok(())
}
