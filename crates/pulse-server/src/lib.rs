//! # Pulse Server
//!
//! HTTP server for the Pulse executive dashboard.
//!
//! ## Features
//!
//! - Server-rendered dashboard page whose view state travels in the query string
//! - Scenario calculator endpoint for live recompute while a slider moves
//! - Content and health endpoints
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use pulse_core::Catalog;
//! use pulse_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default(), Catalog::builtin())?;
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use pulse_core::Catalog;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

/// The Pulse server.
pub struct Server {
    config: ServerConfig,
    catalog: Catalog,
}

impl Server {
    /// Create a new server.
    ///
    /// The catalog is validated here so that no router is ever built over
    /// incomplete content.
    pub fn new(config: ServerConfig, catalog: Catalog) -> ServerResult<Self> {
        let catalog = catalog.validated()?;
        Ok(Self { config, catalog })
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::router_for(self.catalog.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> ServerResult<()> {
        let addr = self.config.socket_addr()?;

        info!("Starting Pulse server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
