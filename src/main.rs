use std::sync::Arc;
use std::time::Duration;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;

use users_api::{
    application::services::clock::SystemClock,
    config::Config,
    infrastructure::{database, repositories::PostgresUserRepository},
    logging,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse()?;
    logging::init(&config.logging)?;

    let pool = database::connect(&config.database).await?;
    let state = Arc::new(ApiState::new(
        PostgresUserRepository::new(pool),
        Arc::new(SystemClock),
    ));

    let server_url = format!("http://localhost:{}", config.port);
    let app = build_app(state, &server_url);

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!(%bind_addr, "Starting server");

    Server::new(TcpListener::bind(bind_addr))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            Some(Duration::from_secs(10)),
        )
        .await?;

    info!("Server stopped");
    Ok(())
}
