use anyhow::Result;
use tracing::{error, info, warn};
use vinoteka::catalog::Catalog;
use vinoteka::config::Config;
use vinoteka::i18n::CatalogCoverage;
use vinoteka::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vinoteka=info".parse()?),
        )
        .init();

    info!("Starting vinoteka storefront service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Load the content snapshot
    let catalog = Catalog::load(&config.catalog_file)?;
    info!(
        "Loaded catalog: {} wines, {} aromas, {} foods, {} moods",
        catalog.wines.len(),
        catalog.aromas.len(),
        catalog.foods.len(),
        catalog.moods.len()
    );

    // Surface translation gaps up front; they degrade, never fail
    let report = CatalogCoverage::validate(&catalog);
    for warning in &report.warnings {
        warn!("catalog: {}", warning);
    }
    for finding in &report.errors {
        error!("catalog: {}", finding);
    }

    server::run(config, catalog).await
}
