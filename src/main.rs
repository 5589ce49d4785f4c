//! Main entry point of the application.
//! Sets up logging, builds the in-memory store, and starts the web server
//! with Axum.

mod backend;
mod consts;
mod database;
mod utils;

use std::{net::SocketAddr, sync::Arc};
use dotenv::dotenv;
use log::info;
use crate::database::Store;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // The store lives as long as the service and is handed to the handlers
    // through the router state
    let store = Arc::new(Store::default());
    let app = backend::router::get_router(store);

    // Start the web server
    let port = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(consts::HTTP_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to open web server listener");

    axum::serve(listener, app)
        .await
        .expect("Failed to bind Axum to listener");
}
