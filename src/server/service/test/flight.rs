use crate::server::{
    error::AppError,
    model::flight::{CreateFlightParams, SaveFlightParams, SeatParam, UpdateFlightParams},
    service::flight::FlightService,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn save_params(flight_route_id: i32, plane_id: i32) -> SaveFlightParams {
    let start = Utc::now() + Duration::days(1);

    SaveFlightParams {
        name: " Morning flight ".to_string(),
        start_date: Some(start),
        end_date: Some(start + Duration::hours(2)),
        price: Some(1_000_000.0),
        is_active: true,
        image: None,
        plane_id,
        flight_route_id,
    }
}

/// Tests creating a flight returns its detail view.
///
/// Expected: Ok(FlightDetails) with trimmed name and seats attached
#[tokio::test]
async fn creates_flight_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, route) = factory::helpers::create_route_with_airports(db).await?;
    let plane = factory::plane::create_plane(db).await?;
    let class_ticket = factory::class_ticket::create_class_ticket(db).await?;

    let details = FlightService::new(db)
        .create(CreateFlightParams {
            flight: save_params(route.id, plane.id),
            seats: vec![SeatParam {
                class_ticket_id: class_ticket.id,
                quantity: 25,
            }],
        })
        .await?;

    assert_eq!(details.flight.name, "Morning flight");
    assert_eq!(details.seats.len(), 1);
    assert_eq!(details.seats[0].quantity, 25);

    Ok(())
}

/// Tests flight validation.
///
/// Expected: Err(BadRequest) for each invalid field
#[tokio::test]
async fn validates_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let service = FlightService::new(db);

    let mut invalid = Vec::new();

    let mut params = save_params(route.id, flight.plane_id);
    params.name = "  ".to_string();
    invalid.push(params);

    let mut params = save_params(route.id, flight.plane_id);
    params.end_date = params.start_date.map(|start| start - Duration::hours(1));
    invalid.push(params);

    let mut params = save_params(route.id, flight.plane_id);
    params.price = Some(-1.0);
    invalid.push(params);

    invalid.push(save_params(999999, flight.plane_id));
    invalid.push(save_params(route.id, 999999));

    for params in invalid {
        let result = service
            .update(UpdateFlightParams {
                id: flight.id,
                flight: params,
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let negative_seats = service
        .create(CreateFlightParams {
            flight: save_params(route.id, flight.plane_id),
            seats: vec![SeatParam {
                class_ticket_id: 1,
                quantity: -5,
            }],
        })
        .await;
    assert!(matches!(negative_seats, Err(AppError::BadRequest(_))));

    let unknown_class = service
        .create(CreateFlightParams {
            flight: save_params(route.id, flight.plane_id),
            seats: vec![SeatParam {
                class_ticket_id: 999999,
                quantity: 10,
            }],
        })
        .await;
    assert!(matches!(unknown_class, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Flight::find().count(db).await?, 1);

    let blank_rename = service.rename(flight.id, " ".to_string()).await;
    assert!(matches!(blank_rename, Err(AppError::BadRequest(_))));

    Ok(())
}
