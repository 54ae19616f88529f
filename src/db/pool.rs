use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Create a PostgreSQL connection pool
///
/// The access key is applied as the connection password, overriding any
/// password embedded in the URL.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    let options =
        PgConnectOptions::from_str(&config.database_url)?.password(&config.database_access_key);

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(options)
        .await?;

    tracing::info!(
        "Database connection pool created successfully (max {} connections)",
        config.database_max_connections
    );

    Ok(pool)
}
