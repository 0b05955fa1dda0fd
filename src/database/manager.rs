use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors from pool construction and store connectivity
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Build the service's connection pool from DATABASE_URL.
///
/// PROPS_DB, when set, replaces the database name in the URL so tests and
/// deployments can share one DATABASE_URL while targeting their own
/// database.
pub async fn connect() -> Result<PgPool, DatabaseError> {
    let cfg = &crate::config::config().database;
    let connection_string = build_connection_string()?;

    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .connect(&connection_string)
        .await?;

    info!("Created database pool");
    Ok(pool)
}

fn build_connection_string() -> Result<String, DatabaseError> {
    let base = std::env::var("DATABASE_URL")
        .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

    let mut url = url::Url::parse(&base).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
    if let Ok(db_name) = std::env::var("PROPS_DB") {
        url.set_path(&format!("/{}", db_name));
    }
    Ok(url.to_string())
}

/// Apply the bootstrap schema. Idempotent; runs before the listener binds.
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
