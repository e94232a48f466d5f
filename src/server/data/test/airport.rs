use crate::server::data::{airport::AirportRepository, ticket::TicketRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests listing airports.
///
/// Expected: Ok with all airports ordered by id
#[tokio::test]
async fn gets_all_airports() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Airport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::airport::AirportFactory::new(db)
        .name("Tan Son Nhat International Airport")
        .address("Ho Chi Minh City")
        .build()
        .await?;
    let second = factory::airport::create_airport(db).await?;

    let repo = AirportRepository::new(db);
    let airports = repo.get_all().await?;

    assert_eq!(airports.len(), 2);
    assert_eq!(airports[0].id, first.id);
    assert_eq!(airports[0].address, "Ho Chi Minh City");
    assert_eq!(airports[1].id, second.id);

    assert!(repo.exists(first.id).await?);
    assert!(!repo.exists(999999).await?);

    Ok(())
}

/// Tests listing every ticket.
///
/// Expected: Ok with the booked ticket
#[tokio::test]
async fn gets_all_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    let (_route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let class_ticket = factory::class_ticket::create_class_ticket(db).await?;
    let user = factory::user::create_user(db).await?;
    let bill = factory::bill::create_bill(db, user.id).await?;
    let ticket = factory::ticket::create_ticket(
        db,
        factory::ticket::TicketRefs {
            flight_id: flight.id,
            user_id: user.id,
            class_ticket_id: class_ticket.id,
            bill_id: bill.id,
        },
        1_500_000.0,
    )
    .await?;

    let tickets = repo.get_all().await?;

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, ticket.id);
    assert_eq!(tickets[0].price, 1_500_000.0);

    Ok(())
}
