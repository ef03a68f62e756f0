//! Web server module.

mod handlers;

pub use handlers::*;

use crate::config::ServerConfig;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

/// JSON front end for the aggregation engine.
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState { config },
        }
    }

    /// Build the router with all routes.
    fn routes(&self) -> Router {
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

        Router::new()
            .route("/api/summary", post(handlers::handle_summary))
            .route("/api/stats", post(handlers::handle_stats))
            .route("/api/history", post(handlers::handle_history))
            .route("/api/chart", post(handlers::handle_chart))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
            .with_state(self.state.clone())
    }

    /// Start the server on the configured port.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.state.config.http_port));
        let router = self.routes();

        tracing::info!("Web server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
