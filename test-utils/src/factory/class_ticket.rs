//! Fare class factory for creating test class ticket entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ClassTicketFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: f64,
    benefit: Option<String>,
}

impl<'a> ClassTicketFactory<'a> {
    /// Creates a new ClassTicketFactory.
    ///
    /// Defaults:
    /// - name: `"Class {id}"`
    /// - price: `500_000.0`
    /// - benefit: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Class {}", next_id()),
            price: 500_000.0,
            benefit: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn benefit(mut self, benefit: Option<String>) -> Self {
        self.benefit = benefit;
        self
    }

    pub async fn build(self) -> Result<entity::class_ticket::Model, DbErr> {
        entity::class_ticket::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            benefit: ActiveValue::Set(self.benefit),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fare class with default values.
pub async fn create_class_ticket(
    db: &DatabaseConnection,
) -> Result<entity::class_ticket::Model, DbErr> {
    ClassTicketFactory::new(db).build().await
}
