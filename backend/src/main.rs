use anyhow::Result;
use library_calendar::config::AppConfig;
use library_calendar::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load_default()?;
    let addr = config.socket_addr()?;

    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, config.cors_origin.as_deref())?;

    info!("🚀 Starting library calendar on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
