//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. Passwords are stored the same way the
//! server stores them so created users can log in.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{Gender, UserRole};
use md5::{Digest, Md5};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("admin")
///     .password("123456")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    username: String,
    password: String,
    role: UserRole,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"`
    /// - username: `"user{id}"`
    /// - password: `"password"`
    /// - role: `UserRole::Customer`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            username: format!("user{}", id),
            password: "password".to_string(),
            role: UserRole::Customer,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the plain-text password; it is hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let digest = Md5::digest(self.password.as_bytes());

        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            birth_day: ActiveValue::Set(None),
            gender: ActiveValue::Set(Gender::Male),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(format!("{:x}", digest)),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the admin role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.username.is_empty());
        assert_eq!(user.role, UserRole::Customer);
        // md5("password")
        assert_eq!(user.password, "5f4dcc3b5aa765d61d8327deb882cf99");

        Ok(())
    }

    #[tokio::test]
    async fn creates_admin_user() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_admin(db).await?;

        assert_eq!(user.role, UserRole::Admin);

        Ok(())
    }
}
