use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, seed,
    service::user::UserService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's SQLite pool.
///
/// Sessions expire after a week of inactivity. The session table is created if
/// missing.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Ensures an admin account can log in.
///
/// Creates the configured admin when the database has none. Without configured
/// credentials a missing admin is only reported.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    match &config.admin {
        Some(credentials) => {
            let created = UserService::new(db)
                .ensure_admin(&credentials.username, &credentials.password)
                .await?;

            if let Some(admin) = created {
                tracing::info!("Created admin user '{}'", admin.username);
            }
        }
        None => {
            if !UserRepository::new(db).admin_exists().await? {
                tracing::warn!(
                    "No admin user exists, set ADMIN_USERNAME and ADMIN_PASSWORD to create one"
                );
            }
        }
    }

    Ok(())
}

/// Seeds demo flight data when enabled and the database holds no airports yet.
pub async fn seed_demo_data(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed_demo_data {
        return Ok(());
    }

    if seed::seed_if_empty(db).await? {
        tracing::info!("Seeded demo flight data");
    }

    Ok(())
}
