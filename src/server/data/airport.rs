use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::flight::Airport;

pub struct AirportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all airports ordered by id
    pub async fn get_all(&self) -> Result<Vec<Airport>, DbErr> {
        let airports = entity::prelude::Airport::find()
            .order_by_asc(entity::airport::Column::Id)
            .all(self.db)
            .await?;

        Ok(airports.into_iter().map(Airport::from_entity).collect())
    }

    /// Checks whether an airport with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Airport::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}
