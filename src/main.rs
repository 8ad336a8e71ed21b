//! Content Remixer - Server Entry Point

use tracing_subscriber::EnvFilter;

use content_remixer::server;
use content_remixer::state::AppState;

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let state = AppState::initialize()?;
    server::serve(state, port).await?;

    Ok(())
}
