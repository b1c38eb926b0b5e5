use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::{config::DatabaseConfig, infrastructure::repositories::PgPool};

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .with_context(|| {
            format!(
                "failed to connect to database {} at {}:{}",
                config.name, config.host, config.port
            )
        })?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    Ok(pool)
}
