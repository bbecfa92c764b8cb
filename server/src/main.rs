#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "readiness host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let host = config::HostConfig::from_env()?;
    let app = routes::leptos_app().map_err(HostError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(host.socket_addr()).await?;
    tracing::info!(addr = %host.socket_addr(), "readiness host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
