//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for account lookup, credential checks and
//! registration. Passwords are hashed here so that no caller handles stored hashes.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    model::user::{CreateUserParam, User},
    util::password::hash_password,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Name, username and password are trimmed; the password is stored as its MD5 hex
    /// digest.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique violations on `username`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name.trim().to_string()),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            birth_day: ActiveValue::Set(None),
            gender: ActiveValue::Set(entity::sea_orm_active_enums::Gender::Male),
            username: ActiveValue::Set(param.username.trim().to_string()),
            password: ActiveValue::Set(hash_password(&param.password)),
            role: ActiveValue::Set(param.role),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user matching a username and plain-text password.
    ///
    /// Both inputs are trimmed and the password is compared by its hash, so a wrong
    /// password and an unknown username are indistinguishable.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Credentials match
    /// - `Ok(None)` - No match
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username.trim()))
            .filter(entity::user::Column::Password.eq(hash_password(password)))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a username (after trimming) is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username.trim()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether the configured bootstrap admin must be created.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
