//! Bill factory for creating test bill entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BillFactory<'a> {
    db: &'a DatabaseConnection,
    payer_id: i32,
    total_bill: f64,
    is_paid: bool,
    created_date: DateTime<Utc>,
}

impl<'a> BillFactory<'a> {
    /// Creates a new BillFactory for `payer_id`.
    ///
    /// Defaults:
    /// - total_bill: `0.0`
    /// - is_paid: `false`
    /// - created_date: now
    pub fn new(db: &'a DatabaseConnection, payer_id: i32) -> Self {
        Self {
            db,
            payer_id,
            total_bill: 0.0,
            is_paid: false,
            created_date: Utc::now(),
        }
    }

    pub fn total_bill(mut self, total_bill: f64) -> Self {
        self.total_bill = total_bill;
        self
    }

    pub fn is_paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    pub async fn build(self) -> Result<entity::bill::Model, DbErr> {
        entity::bill::ActiveModel {
            payer_id: ActiveValue::Set(self.payer_id),
            total_bill: ActiveValue::Set(self.total_bill),
            is_paid: ActiveValue::Set(self.is_paid),
            created_date: ActiveValue::Set(self.created_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpaid bill created now.
pub async fn create_bill(
    db: &DatabaseConnection,
    payer_id: i32,
) -> Result<entity::bill::Model, DbErr> {
    BillFactory::new(db, payer_id).build().await
}
