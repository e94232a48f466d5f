//! Revenue and flight-count statistics for the admin dashboard.

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};

use crate::model::stats::{
    PeriodRevenueDto, RevenueStatsDto, RouteFlightCountDto, RouteRevenueDto,
};

/// Granularity of the revenue-by-period report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPeriod {
    #[default]
    Month,
    Quarter,
}

impl StatsPeriod {
    /// Bucket a timestamp falls into: month 1-12 or quarter 1-4.
    pub fn bucket(&self, date: &DateTime<Utc>) -> u32 {
        match self {
            Self::Month => date.month(),
            Self::Quarter => (date.month() - 1) / 3 + 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            other => Err(format!("Unknown statistics period '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteFlightCount {
    pub flight_route_id: i32,
    pub name: String,
    pub flight_count: i64,
}

impl RouteFlightCount {
    pub fn into_dto(self) -> RouteFlightCountDto {
        RouteFlightCountDto {
            flight_route_id: self.flight_route_id,
            name: self.name,
            flight_count: self.flight_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteRevenue {
    pub flight_route_id: i32,
    pub name: String,
    pub revenue: f64,
}

impl RouteRevenue {
    pub fn into_dto(self) -> RouteRevenueDto {
        RouteRevenueDto {
            flight_route_id: self.flight_route_id,
            name: self.name,
            revenue: self.revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRevenue {
    pub period: u32,
    pub revenue: f64,
}

impl PeriodRevenue {
    pub fn into_dto(self) -> PeriodRevenueDto {
        PeriodRevenueDto {
            period: self.period,
            revenue: self.revenue,
        }
    }

    /// Sums ticket prices per period bucket, ascending by bucket.
    ///
    /// Only buckets with at least one ticket appear in the result.
    pub fn aggregate(
        period: StatsPeriod,
        entries: impl IntoIterator<Item = (DateTime<Utc>, f64)>,
    ) -> Vec<Self> {
        let mut buckets: BTreeMap<u32, f64> = BTreeMap::new();

        for (date, price) in entries {
            *buckets.entry(period.bucket(&date)).or_insert(0.0) += price;
        }

        buckets
            .into_iter()
            .map(|(period, revenue)| Self { period, revenue })
            .collect()
    }
}

/// Filters of the revenue-by-period report.
#[derive(Debug, Clone)]
pub struct PeriodRevenueParams {
    pub year: i32,
    pub period: StatsPeriod,
    pub flight_route_id: Option<i32>,
}

/// Both revenue reports of the stats page.
#[derive(Debug, Clone)]
pub struct RevenueStats {
    pub year: i32,
    pub period: StatsPeriod,
    pub by_flight_route: Vec<RouteRevenue>,
    pub by_period: Vec<PeriodRevenue>,
}

impl RevenueStats {
    pub fn into_dto(self) -> RevenueStatsDto {
        RevenueStatsDto {
            year: self.year,
            period: self.period.to_string(),
            revenue_by_flight_route: self
                .by_flight_route
                .into_iter()
                .map(RouteRevenue::into_dto)
                .collect(),
            revenue_by_period: self
                .by_period
                .into_iter()
                .map(PeriodRevenue::into_dto)
                .collect(),
        }
    }
}
