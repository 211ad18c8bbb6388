use sqlx::{PgPool, migrate, postgres::PgPoolOptions};

use crate::config::app_config::AppConfig;

pub async fn connect_and_migrate(config: &AppConfig) -> Result<PgPool, String> {
    let pool = PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(config.persistence_timeout())
        .connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!(
        host = %config.postgres_host,
        database = %config.postgres_database,
        "database pool ready and migrations applied"
    );

    Ok(pool)
}
