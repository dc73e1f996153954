use chat_board::core::{AppState, Config};
use chat_board::create_router;
use chat_board::repositories::{InMemoryMessageRepository, MessageRepository};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;
    config.print_info();

    // Lo store viene scelto una volta sola qui e passato al router tramite lo stato
    let app = match &config.database_url {
        Some(database_url) => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
                .connect(database_url)
                .await?;
            sqlx::migrate!().run(&pool).await?;
            info!("Database connected, migrations applied");
            create_router(Arc::new(AppState::new(MessageRepository::new(pool))))
        }
        None => create_router(Arc::new(AppState::new(InMemoryMessageRepository::new()))),
    };

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
