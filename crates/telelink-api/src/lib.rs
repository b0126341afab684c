//! telelink-api - REST API executing remote vehicle operations
//!
//! Serves the operation dispatcher over HTTP. Each `POST /v1/execute` runs
//! one operation with its own telematics session; nothing is cached between
//! requests.
//!
//! # Usage
//!
//! ```ignore
//! use telelink_api::{create_router, AppState};
//!
//! let state = AppState::with_credentials(factory, credentials);
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, DEFAULT_CREDENTIALS};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the telelink REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Catalogue
        .route("/v1/operations", get(handlers::operations::list_operations))
        .route(
            "/v1/credentials/schema",
            get(handlers::credentials::credential_schema),
        )
        // Execution
        .route("/v1/execute", post(handlers::operations::execute_operation))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
