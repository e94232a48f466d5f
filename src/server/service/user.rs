use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, RegisterError, RegisterParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials, returning the matching user
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_credentials(username, password).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Registers a new customer account.
    ///
    /// Database failures are logged and reported as `RegisterError::Unavailable` so
    /// the registration form can show a maintenance message.
    pub async fn register(&self, params: RegisterParams) -> Result<User, RegisterError> {
        if params.password != params.confirm {
            return Err(RegisterError::PasswordMismatch);
        }

        let repo = UserRepository::new(self.db);

        match repo.username_exists(&params.username).await {
            Ok(true) => return Err(RegisterError::UsernameTaken),
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Failed to check username availability: {}", e);
                return Err(RegisterError::Unavailable);
            }
        }

        repo.create(CreateUserParam {
            name: params.name,
            username: params.username,
            password: params.password,
            role: UserRole::Customer,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to register user: {}", e);
            RegisterError::Unavailable
        })
    }

    /// Creates an admin account unless one already exists.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin that was created
    /// - `Ok(None)` - An admin already exists, or the username is taken
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? || repo.username_exists(username).await? {
            return Ok(None);
        }

        let admin = repo
            .create(CreateUserParam {
                name: "Administrator".to_string(),
                username: username.to_string(),
                password: password.to_string(),
                role: UserRole::Admin,
            })
            .await?;

        Ok(Some(admin))
    }
}
