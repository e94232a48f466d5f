//! Aggregate queries behind the admin dashboard.
//!
//! Flight counts and revenue per route are grouped in SQL. Revenue per period is
//! filtered to the requested year in SQL and bucketed by month or quarter in Rust,
//! since date-part extraction differs between database backends.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::{
    model::stats::{PeriodRevenue, PeriodRevenueParams, RouteFlightCount, RouteRevenue},
    util::date::year_range,
};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts flights per route, including routes without flights, ordered by route id
    pub async fn count_flights_by_flight_route(&self) -> Result<Vec<RouteFlightCount>, DbErr> {
        let rows = entity::prelude::FlightRoute::find()
            .select_only()
            .column(entity::flight_route::Column::Id)
            .column(entity::flight_route::Column::Name)
            .column_as(entity::flight::Column::Id.count(), "flight_count")
            .join(
                JoinType::LeftJoin,
                entity::flight_route::Relation::Flight.def(),
            )
            .group_by(entity::flight_route::Column::Id)
            .group_by(entity::flight_route::Column::Name)
            .order_by_asc(entity::flight_route::Column::Id)
            .into_tuple::<(i32, String, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(flight_route_id, name, flight_count)| RouteFlightCount {
                flight_route_id,
                name,
                flight_count,
            })
            .collect())
    }

    /// Sums ticket prices per route, ordered by route id.
    ///
    /// Only tickets attached to a bill are counted. Routes without tickets are omitted.
    /// `kw` restricts the result to routes whose name contains it.
    pub async fn revenue_by_flight_route(
        &self,
        kw: Option<&str>,
    ) -> Result<Vec<RouteRevenue>, DbErr> {
        let mut query = entity::prelude::FlightRoute::find()
            .select_only()
            .column(entity::flight_route::Column::Id)
            .column(entity::flight_route::Column::Name)
            .column_as(entity::ticket::Column::Price.sum(), "revenue")
            .join(
                JoinType::InnerJoin,
                entity::flight_route::Relation::Flight.def(),
            )
            .join(JoinType::InnerJoin, entity::flight::Relation::Ticket.def())
            .join(JoinType::InnerJoin, entity::ticket::Relation::Bill.def());

        if let Some(kw) = kw.filter(|kw| !kw.is_empty()) {
            query = query.filter(entity::flight_route::Column::Name.contains(kw));
        }

        let rows = query
            .group_by(entity::flight_route::Column::Id)
            .group_by(entity::flight_route::Column::Name)
            .order_by_asc(entity::flight_route::Column::Id)
            .into_tuple::<(i32, String, Option<f64>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(flight_route_id, name, revenue)| RouteRevenue {
                flight_route_id,
                name,
                revenue: revenue.unwrap_or(0.0),
            })
            .collect())
    }

    /// Sums ticket prices per month or quarter of the bill's creation date.
    ///
    /// Only bills created in `params.year` are considered; with `flight_route_id` set,
    /// only tickets for flights on that route. Periods without revenue are omitted.
    pub async fn revenue_by_period(
        &self,
        params: &PeriodRevenueParams,
    ) -> Result<Vec<PeriodRevenue>, DbErr> {
        let Some((year_start, year_end)) = year_range(params.year) else {
            return Ok(Vec::new());
        };

        let mut query = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::bill::Column::CreatedDate)
            .column(entity::ticket::Column::Price)
            .join(JoinType::InnerJoin, entity::ticket::Relation::Bill.def())
            .join(JoinType::InnerJoin, entity::ticket::Relation::Flight.def())
            .filter(entity::bill::Column::CreatedDate.gte(year_start))
            .filter(entity::bill::Column::CreatedDate.lt(year_end));

        if let Some(flight_route_id) = params.flight_route_id {
            query = query.filter(entity::flight::Column::FlightRouteId.eq(flight_route_id));
        }

        let entries = query
            .into_tuple::<(DateTime<Utc>, f64)>()
            .all(self.db)
            .await?;

        Ok(PeriodRevenue::aggregate(params.period, entries))
    }
}
