//! Plane factory for creating test plane entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PlaneFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> PlaneFactory<'a> {
    /// Creates a new PlaneFactory named `"Plane {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Plane {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::plane::Model, DbErr> {
        entity::plane::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plane with default values.
pub async fn create_plane(db: &DatabaseConnection) -> Result<entity::plane::Model, DbErr> {
    PlaneFactory::new(db).build().await
}
