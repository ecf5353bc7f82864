//! Minimal HTTP service for CRUD over todo items held in memory.
//!
//! # Overview
//! `GET /alive` reports liveness; `/todoitems` and `/todoitems/{id}` expose
//! list, get, create, update and delete over a volatile `TodoStore`.
//!
//! # Design
//! - Handlers are thin: extract, call the store, map the outcome to a
//!   status code. Failures are `ApiError` values rendered as bare statuses.
//! - The store is the only shared state; it is passed as router state and
//!   serialises writes behind a single lock.
//! - Unparsable bodies and non-integer path ids are rejected by axum's
//!   extractors before any handler runs.

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use model::{TodoId, TodoItem};
pub use store::TodoStore;

/// Router backed by a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

pub fn app_with_store(store: TodoStore) -> Router {
    Router::new()
        .route("/alive", get(handlers::alive))
        .route(
            "/todoitems",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todoitems/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves `router` until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
