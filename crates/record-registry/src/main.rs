//! Record Registry - Entry point.

use record_registry::{
    api::{create_router, AppState},
    config::Config,
    store::{self, RecordStore},
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Record Registry");

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    // Seed the store
    let seed = match &config.seed.path {
        Some(path) => match store::load_seed(path).await {
            Ok(records) => records,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => store::default_seed(),
    };
    let store = RecordStore::new(seed);
    info!("Store seeded with {} records", store.count());

    let app = create_router(AppState::new(store));

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
