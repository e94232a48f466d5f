use super::*;

/// Tests filtering flights by route endpoints and departure day.
///
/// Verifies each criterion narrows the result independently and that an empty
/// search returns every flight.
///
/// Expected: Ok with only matching flights, ordered by id
#[tokio::test]
async fn filters_by_route_and_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (start, end, route) = factory::helpers::create_route_with_airports(db).await?;
    let (_, _, other_route) = factory::helpers::create_route_with_airports(db).await?;
    let plane = factory::plane::create_plane(db).await?;

    let morning = factory::flight::FlightFactory::new(db, route.id, plane.id)
        .start_date(Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).single())
        .build()
        .await?;
    let next_day = factory::flight::FlightFactory::new(db, route.id, plane.id)
        .start_date(Utc.with_ymd_and_hms(2024, 5, 21, 8, 0, 0).single())
        .build()
        .await?;
    let elsewhere = factory::flight::FlightFactory::new(db, other_route.id, plane.id)
        .start_date(Utc.with_ymd_and_hms(2024, 5, 20, 23, 59, 0).single())
        .build()
        .await?;

    let repo = FlightRepository::new(db);

    let all = repo.search(&FlightSearchParams::default()).await?;
    let ids: Vec<i32> = all.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![morning.id, next_day.id, elsewhere.id]);

    let by_route = repo
        .search(&FlightSearchParams {
            from: Some(start.id),
            to: Some(end.id),
            date: None,
        })
        .await?;
    let ids: Vec<i32> = by_route.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![morning.id, next_day.id]);

    let by_day = repo
        .search(&FlightSearchParams {
            from: None,
            to: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 20),
        })
        .await?;
    let ids: Vec<i32> = by_day.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![morning.id, elsewhere.id]);

    let combined = repo
        .search(&FlightSearchParams {
            from: Some(start.id),
            to: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 21),
        })
        .await?;
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].id, next_day.id);

    Ok(())
}

/// Tests the distinct departure dates listed on the home page.
///
/// Expected: Ok with unique non-null dates, ascending
#[tokio::test]
async fn lists_distinct_start_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, route) = factory::helpers::create_route_with_airports(db).await?;
    let plane = factory::plane::create_plane(db).await?;

    let early = Utc.with_ymd_and_hms(2024, 1, 22, 8, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 6, 20, 7, 0, 0).unwrap();

    for start_date in [Some(late), Some(early), Some(late), None] {
        factory::flight::FlightFactory::new(db, route.id, plane.id)
            .start_date(start_date)
            .build()
            .await?;
    }

    let dates = FlightRepository::new(db).get_start_dates().await?;

    assert_eq!(dates, vec![early, late]);

    Ok(())
}

/// Tests paging through flights with a search term.
///
/// Expected: Ok with the page slice and the total count of matches
#[tokio::test]
async fn paginates_with_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, route) = factory::helpers::create_route_with_airports(db).await?;
    let plane = factory::plane::create_plane(db).await?;

    let mut hanoi = Vec::new();
    for i in 0..3 {
        let flight = factory::flight::FlightFactory::new(db, route.id, plane.id)
            .name(format!("Ha Noi {}", i))
            .build()
            .await?;
        hanoi.push(flight.id);
    }
    let other = factory::flight::FlightFactory::new(db, route.id, plane.id)
        .name("Ca Mau")
        .build()
        .await?;

    let repo = FlightRepository::new(db);

    let (page, total) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(total, 4);
    assert_eq!(page.len(), 4);

    let (page, total) = repo.get_paginated(Some("Ha Noi"), 1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, hanoi[2]);

    let (page, total) = repo
        .get_paginated(Some(&other.id.to_string()), 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(page[0].name, "Ca Mau");

    Ok(())
}
