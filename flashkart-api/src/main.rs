use std::net::SocketAddr;

use flashkart_api::{app, AppState};
use flashkart_catalog::PriceSynthesizer;
use flashkart_store::{app_config::Config, JsonCatalogRepository, PricedCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flashkart_api=debug,flashkart_store=info,flashkart_catalog=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Starting Flash Kart API on port {} ({:?}, {:?} rounding)",
        config.server.port,
        config.pricing.algorithm,
        config.pricing.rounding
    );

    let repo = JsonCatalogRepository::open(&config.catalog.path).await?;
    let synthesizer = PriceSynthesizer::new(config.pricing);
    let catalog = PricedCatalog::build(&repo, &synthesizer, config.store_policies()).await?;

    let app = app(AppState::new(catalog, synthesizer));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
