//! User domain models and parameters.
//!
//! Provides the domain model for application accounts and the parameters used to
//! register new customers.

use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{RegisterFormDto, UserDto};

/// Application account with its role.
///
/// The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Unique login name.
    pub username: String,
    pub role: UserRole,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            username: self.username,
            role: role_name(&self.role).to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            username: entity.username,
            role: entity.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Lowercase name of a role as exposed over the API.
pub fn role_name(role: &UserRole) -> &'static str {
    match role {
        UserRole::Customer => "customer",
        UserRole::Employee => "employee",
        UserRole::Admin => "admin",
    }
}

/// Parameters for inserting a new user.
///
/// Fields are trimmed and the plain-text password is hashed on insert.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

/// Registration input with every field present.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub username: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterParams {
    /// Returns `None` when any field is missing or blank.
    pub fn from_dto(dto: RegisterFormDto) -> Option<Self> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Some(Self {
            name: present(dto.name)?,
            username: present(dto.username)?,
            password: present(dto.password)?,
            confirm: present(dto.confirm)?,
        })
    }
}

/// Reasons a registration is rejected, each shown to the user as a form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    InvalidData,
    PasswordMismatch,
    UsernameTaken,
    /// Storage failed; details are logged, never shown.
    Unavailable,
}

impl RegisterError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidData => "Invalid data!",
            Self::PasswordMismatch => "Passwords do not match!",
            Self::UsernameTaken => "Username already exists!",
            Self::Unavailable => "System under maintenance! Please come back later!",
        }
    }
}
