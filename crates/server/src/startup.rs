use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use service::store::TruckStore;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Dataset location from configs or `DATASET_PATH`, defaulting to the
/// bundled snapshot.
fn load_dataset_path() -> String {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.dataset.normalize_from_env();
            cfg.dataset.path
        }
        Err(_) => env::var("DATASET_PATH").unwrap_or_else(|_| "data/food-trucks.json".to_string()),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // The snapshot is read exactly once; the store lives in memory from
    // here on.
    let dataset_path = load_dataset_path();
    let store = TruckStore::load(&dataset_path).await?;
    let count = store.len().await;
    info!(count, path = %dataset_path, "loaded food truck snapshot");

    let cors = build_cors();
    let app: Router = routes::build_router(store, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting food truck API");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
