mod config;
mod routes;

use config::ServerConfig;

/// Errors that stop the host process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listening socket could not be bound.
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),

    /// The server loop exited with an error.
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, api_base = config.api.base_url(), "triage page listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
