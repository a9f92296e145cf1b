use std::net::SocketAddr;
use std::sync::Arc;

use aurum_api::{app, AppState};
use aurum_store::{app_config::Config, load_catalog, GoldPriceClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aurum_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Aurum API on port {}", config.server.port);

    let catalog = load_catalog(&config.catalog.path).expect("Failed to load product catalog");

    let gold = GoldPriceClient::new(config.gold_api.url.clone(), config.gold_api.symbol.clone());

    let app_state = AppState {
        catalog: Arc::new(catalog),
        gold: Arc::new(gold),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
