mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::Config;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting risk calculator gateway");

    let config = Config::from_env()?;
    tracing::info!(
        advisory_mode = ?config.calculator.advisory_mode,
        sizing_policy = ?config.default_sizing_policy,
        "Loaded configuration"
    );

    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
