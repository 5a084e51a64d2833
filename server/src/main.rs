mod config;
mod routes;

use config::{ConfigError, ServerConfig};

/// Startup failures.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(api_base_url = %config.portal.api_base_url, "portal backend configured");

    let app = routes::leptos_app().map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "oti-connect listening");
    axum::serve(listener, app).await?;
    Ok(())
}
