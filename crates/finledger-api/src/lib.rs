//! HTTP API server for finledger
//!
//! Routes are organized into modules:
//! - routes::transactions: Transaction CRUD (JSON)

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use finledger_config::Config;
use finledger_core::Store;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;

/// Application state
///
/// The store sits behind a single RwLock so that every load-mutate-save
/// cycle is serialized; concurrent writers cannot lose each other's
/// updates.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{
        api_transaction_create, api_transaction_delete, api_transaction_detail,
        api_transaction_update, api_transactions,
    };

    // The frontend is served separately; any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/transactions", get(api_transactions))
        .route("/transactions", post(api_transaction_create))
        .route("/transactions/:id", get(api_transaction_detail))
        .route("/transactions/:id", put(api_transaction_update))
        .route("/transactions/:id", delete(api_transaction_delete))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// This is the main entry point for the finledger server.
/// It creates the router, binds to the configured address, and starts
/// listening for requests.
pub async fn start_server(config: Config, store: Arc<RwLock<Store>>) {
    let addr = config.bind_addr();
    let state = AppState { store, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    log::info!("Starting finledger server on http://{}", addr);

    match axum::serve(listener, router).await {
        Ok(_) => log::info!("Server stopped gracefully"),
        Err(e) => log::error!("Server error: {}", e),
    }
}
