use crate::server::{
    data::booking::BookingRepository,
    model::{
        booking::{BookingOutcome, CreateBookingParams},
        flight::SeatParam,
    },
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

struct Fixture {
    user_id: i32,
    flight_id: i32,
    first_id: i32,
    second_id: i32,
    first_seat_id: i32,
}

/// Creates a customer and a flight priced 1,000,000 with two fare classes:
/// 2 first class seats at 2,000,000 and 5 second class seats at 500,000.
async fn fixture(db: &DatabaseConnection) -> Result<Fixture, DbErr> {
    let user = factory::user::create_user(db).await?;
    let (_route, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let first = factory::class_ticket::ClassTicketFactory::new(db)
        .price(2_000_000.0)
        .build()
        .await?;
    let second = factory::class_ticket::create_class_ticket(db).await?;
    let first_seat = factory::seat::create_seat(db, flight.id, first.id, 2).await?;
    factory::seat::create_seat(db, flight.id, second.id, 5).await?;

    Ok(Fixture {
        user_id: user.id,
        flight_id: flight.id,
        first_id: first.id,
        second_id: second.id,
        first_seat_id: first_seat.id,
    })
}

async fn seats_left(db: &DatabaseConnection, seat_id: i32) -> Result<i32, DbErr> {
    Ok(entity::prelude::Seat::find_by_id(seat_id)
        .one(db)
        .await?
        .map(|s| s.quantity)
        .unwrap_or_default())
}

/// Tests booking seats in two classes.
///
/// Verifies ticket prices combine flight and class prices, the bill total sums the
/// tickets and seat inventory is decremented.
///
/// Expected: Ok(Booked) with three tickets
#[tokio::test]
async fn books_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;

    let outcome = BookingRepository::new(db)
        .create(CreateBookingParams {
            user_id: f.user_id,
            flight_id: f.flight_id,
            seats: vec![
                SeatParam {
                    class_ticket_id: f.first_id,
                    quantity: 2,
                },
                SeatParam {
                    class_ticket_id: f.second_id,
                    quantity: 1,
                },
            ],
        })
        .await?;

    let BookingOutcome::Booked(bill) = outcome else {
        panic!("Expected booking to succeed, got: {:?}", outcome);
    };

    assert_eq!(bill.payer_id, f.user_id);
    assert!(!bill.is_paid);
    assert_eq!(bill.tickets.len(), 3);
    assert_eq!(bill.tickets[0].price, 3_000_000.0);
    assert_eq!(bill.tickets[2].price, 1_500_000.0);
    assert_eq!(bill.total_bill, 7_500_000.0);
    assert_eq!(seats_left(db, f.first_seat_id).await?, 0);

    Ok(())
}

/// Tests overbooking rolls back the whole booking.
///
/// Verifies that seats already decremented for an earlier class are restored.
///
/// Expected: Ok(SeatsUnavailable) and no bill written
#[tokio::test]
async fn rolls_back_when_seats_unavailable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;

    let outcome = BookingRepository::new(db)
        .create(CreateBookingParams {
            user_id: f.user_id,
            flight_id: f.flight_id,
            seats: vec![
                SeatParam {
                    class_ticket_id: f.first_id,
                    quantity: 1,
                },
                SeatParam {
                    class_ticket_id: f.second_id,
                    quantity: 6,
                },
            ],
        })
        .await?;

    assert!(matches!(outcome, BookingOutcome::SeatsUnavailable(id) if id == f.second_id));
    assert_eq!(seats_left(db, f.first_seat_id).await?, 2);
    assert_eq!(entity::prelude::Bill::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Ticket::find().count(db).await?, 0);

    Ok(())
}

/// Tests booking an unknown flight or a class the flight does not offer.
///
/// Expected: Ok(FlightNotFound) and Ok(UnknownClass) with nothing written
#[tokio::test]
async fn rejects_unknown_flight_and_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;
    let repo = BookingRepository::new(db);

    let outcome = repo
        .create(CreateBookingParams {
            user_id: f.user_id,
            flight_id: 999999,
            seats: vec![SeatParam {
                class_ticket_id: f.first_id,
                quantity: 1,
            }],
        })
        .await?;
    assert!(matches!(outcome, BookingOutcome::FlightNotFound));

    let outcome = repo
        .create(CreateBookingParams {
            user_id: f.user_id,
            flight_id: f.flight_id,
            seats: vec![SeatParam {
                class_ticket_id: 999999,
                quantity: 1,
            }],
        })
        .await?;
    assert!(matches!(outcome, BookingOutcome::UnknownClass(999999)));

    assert_eq!(entity::prelude::Bill::find().count(db).await?, 0);

    Ok(())
}

/// Tests listing and paying a user's bills.
///
/// Expected: Ok with the user's own bills only, pay succeeds once per owner
#[tokio::test]
async fn lists_and_pays_bills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let f = fixture(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let repo = BookingRepository::new(db);

    repo.create(CreateBookingParams {
        user_id: f.user_id,
        flight_id: f.flight_id,
        seats: vec![SeatParam {
            class_ticket_id: f.second_id,
            quantity: 2,
        }],
    })
    .await?;

    let bills = repo.get_by_user(f.user_id).await?;
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].tickets.len(), 2);
    assert!(repo.get_by_user(stranger.id).await?.is_empty());

    let bill_id = bills[0].id;
    assert!(repo.pay(bill_id, stranger.id).await?.is_none());

    let paid = repo.pay(bill_id, f.user_id).await?.unwrap();
    assert!(paid.is_paid);
    assert_eq!(paid.tickets.len(), 2);

    let again = repo.pay(bill_id, f.user_id).await?.unwrap();
    assert!(again.is_paid);

    Ok(())
}
