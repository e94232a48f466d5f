use sea_orm::DatabaseConnection;

use crate::server::{
    data::stats::StatsRepository,
    error::AppError,
    model::stats::{PeriodRevenueParams, RevenueStats, RouteFlightCount},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of flights on every route, for the admin index
    pub async fn flight_counts(&self) -> Result<Vec<RouteFlightCount>, AppError> {
        let repo = StatsRepository::new(self.db);

        Ok(repo.count_flights_by_flight_route().await?)
    }

    /// Revenue by route (filtered by `kw`) and by period of `params.year`
    pub async fn revenue(
        &self,
        kw: Option<&str>,
        params: PeriodRevenueParams,
    ) -> Result<RevenueStats, AppError> {
        let repo = StatsRepository::new(self.db);

        let by_flight_route = repo.revenue_by_flight_route(kw).await?;
        let by_period = repo.revenue_by_period(&params).await?;

        Ok(RevenueStats {
            year: params.year,
            period: params.period,
            by_flight_route,
            by_period,
        })
    }
}
