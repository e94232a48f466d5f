use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    /// One of `customer`, `employee`, `admin`.
    pub role: String,
}

/// Credentials submitted by the customer and admin login forms.
#[derive(Deserialize, ToSchema, Debug)]
pub struct LoginFormDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form. Every field is optional so a missing field can be reported
/// as invalid data instead of a deserialization rejection.
#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct RegisterFormDto {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
}
