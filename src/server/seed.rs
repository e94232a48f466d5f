//! Demo data for a fresh database: airports, routes, planes, flights, fare classes
//! and seat inventory.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

const AIRPORTS: [(&str, &str); 10] = [
    ("Tan Son Nhat International Airport", "Ho Chi Minh City"),
    ("Rach Gia Airport", "Rach Gia, Kien Giang"),
    ("Dien Bien Phu Airport", "Dien Bien"),
    ("Noi Bai International Airport", "Ha Noi"),
    ("Can Tho International Airport", "Can Tho"),
    ("Cam Ranh International Airport", "Khanh Hoa"),
    ("Cat Bi International Airport", "Hai Phong"),
    ("Ca Mau Airport", "Ca Mau"),
    ("Phu Quoc International Airport", "Phu Quoc, Kien Giang"),
    ("Buon Ma Thuot Airport", "Dak Lak"),
];

/// Route name with start and end airport, as indexes into `AIRPORTS`.
const ROUTES: [(&str, usize, usize); 8] = [
    ("Ho Chi Minh City - Ha Noi", 0, 3),
    ("Ho Chi Minh City - Ca Mau", 0, 7),
    ("Hai Phong - Ha Noi", 6, 3),
    ("Khanh Hoa - Phu Quoc", 5, 8),
    ("Can Tho - Dak Lak", 4, 9),
    ("Khanh Hoa - Ho Chi Minh City", 5, 0),
    ("Rach Gia - Dien Bien", 1, 2),
    ("Ha Noi - Dak Lak", 3, 9),
];

/// Flight name, route index, departure and arrival `(y, m, d, h, min)`, base price.
#[allow(clippy::type_complexity)]
const FLIGHTS: [(&str, usize, (i32, u32, u32, u32, u32), (i32, u32, u32, u32, u32), f64); 8] = [
    ("Ho Chi Minh City - Ca Mau", 1, (2024, 5, 20, 8, 0), (2024, 5, 20, 10, 0), 1_000_000.0),
    ("Ho Chi Minh City - Ha Noi", 0, (2024, 5, 20, 8, 0), (2024, 5, 21, 5, 0), 3_000_000.0),
    ("Rach Gia - Dien Bien", 6, (2024, 6, 20, 7, 0), (2024, 6, 20, 10, 0), 2_000_000.0),
    ("Hai Phong - Ha Noi", 2, (2024, 6, 21, 15, 30), (2024, 6, 21, 20, 0), 3_000_000.0),
    ("Khanh Hoa - Phu Quoc", 3, (2024, 10, 21, 18, 0), (2024, 10, 21, 20, 0), 1_800_000.0),
    ("Can Tho - Dak Lak", 4, (2024, 1, 22, 8, 0), (2024, 1, 22, 15, 0), 3_000_000.0),
    ("Ha Noi - Dak Lak", 7, (2024, 2, 20, 8, 0), (2024, 2, 21, 1, 0), 3_000_000.0),
    ("Khanh Hoa - Ho Chi Minh City", 5, (2024, 5, 21, 8, 0), (2024, 5, 21, 17, 0), 3_000_000.0),
];

/// Fare class name, price, benefit and seats per flight.
const CLASSES: [(&str, f64, &str, i32); 2] = [
    ("First class", 2_000_000.0, "VIP seating with complimentary meals and drinks", 25),
    ("Second class", 1_000_000.0, "Complimentary drinks", 75),
];

const PLANES: usize = 8;

fn utc((year, month, day, hour, min): (i32, u32, u32, u32, u32)) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).single()
}

/// Inserts the demo data unless airports already exist.
///
/// # Returns
/// - `Ok(true)` - Data was inserted
/// - `Ok(false)` - Database already had airports, nothing was written
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<bool, DbErr> {
    if entity::prelude::Airport::find().count(db).await? > 0 {
        return Ok(false);
    }

    let mut airport_ids = Vec::with_capacity(AIRPORTS.len());
    for (name, address) in AIRPORTS {
        let airport = entity::airport::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(address.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        airport_ids.push(airport.id);
    }

    let mut route_ids = Vec::with_capacity(ROUTES.len());
    for (name, start, end) in ROUTES {
        let route = entity::flight_route::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            start_airport_id: ActiveValue::Set(airport_ids[start]),
            end_airport_id: ActiveValue::Set(airport_ids[end]),
            ..Default::default()
        }
        .insert(db)
        .await?;
        route_ids.push(route.id);
    }

    let mut plane_ids = Vec::with_capacity(PLANES);
    for number in 1..=PLANES {
        let plane = entity::plane::ActiveModel {
            name: ActiveValue::Set(format!("Plane {}", number)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        plane_ids.push(plane.id);
    }

    let mut classes = Vec::with_capacity(CLASSES.len());
    for (name, price, benefit, seats) in CLASSES {
        let class_ticket = entity::class_ticket::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            price: ActiveValue::Set(price),
            benefit: ActiveValue::Set(Some(benefit.to_string())),
            ..Default::default()
        }
        .insert(db)
        .await?;
        classes.push((class_ticket.id, seats));
    }

    for (index, (name, route, start, end, price)) in FLIGHTS.into_iter().enumerate() {
        let flight = entity::flight::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            start_date: ActiveValue::Set(utc(start)),
            end_date: ActiveValue::Set(utc(end)),
            price: ActiveValue::Set(Some(price)),
            is_active: ActiveValue::Set(true),
            image: ActiveValue::Set(None),
            plane_id: ActiveValue::Set(plane_ids[index % plane_ids.len()]),
            flight_route_id: ActiveValue::Set(route_ids[route]),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for &(class_ticket_id, quantity) in &classes {
            entity::seat::ActiveModel {
                quantity: ActiveValue::Set(quantity),
                class_ticket_id: ActiveValue::Set(class_ticket_id),
                flight_id: ActiveValue::Set(flight.id),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(true)
}
