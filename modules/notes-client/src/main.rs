//! Notes Client — local web page for browsing and editing notes held by a
//! remote notes REST API.
//!
//! Loads the note list on startup, serves the page, and turns each button or
//! form post into one call against the notes API.
//!
//! Default: http://127.0.0.1:9110/

mod config;
mod controller;
mod notes_api;
mod page;
mod routes;
mod session;
mod ui;
mod view;

use config::Config;
use controller::NotesClient;
use notes_api::NotesApiClient;
use routes::AppState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let api = match NotesApiClient::new(&config.api_base_url, config.api_timeout) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to create notes API client: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Using notes API at {}", api.base_url());

    let mut client = NotesClient::new(api);
    client.load_notes().await;
    log::info!("Initial load: {} notes", client.page().cards.len());

    let state = Arc::new(AppState {
        client: Mutex::new(client),
    });
    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    log::info!("Notes Client listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
