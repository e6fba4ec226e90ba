use anyhow::Result;
use bikepacking_tracker::shell::config::AppConfig;
use bikepacking_tracker::shell::http;
use bikepacking_tracker::shell::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Bikepacking Tracker API...");

    let state = AppState::in_memory();
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
