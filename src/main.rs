use anyhow::Result;
use aetheris::{AetherisConfig, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AetherisConfig::load()?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        "Starting {} v{} ({} {})",
        config.page.title,
        aetheris::VERSION,
        config.page.icon,
        config.page.layout
    );

    web::run(config).await
}
