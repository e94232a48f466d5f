use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::booking::Ticket;

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tickets ordered by id
    pub async fn get_all(&self) -> Result<Vec<Ticket>, DbErr> {
        let tickets = entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        Ok(tickets.into_iter().map(Ticket::from_entity).collect())
    }
}
