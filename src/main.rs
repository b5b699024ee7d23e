use anyhow::Result;
use scouting_landing::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scouting_landing=info".parse()?),
        )
        .init();

    info!("Starting localized landing site");

    let config = config::Config::from_env()?;
    server::serve(config).await
}
