mod banding;
mod common;
mod error;
mod games;
mod oracle;
mod players;
mod propositions;
mod routes;
mod sessions;
mod status;
mod views;

pub use error::{ApiError, ApiResult};
pub use oracle::{OllamaOracle, OracleClient};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use database::{SnapshotStore, Storage};
use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct CourtsideServer {
    data: AppData,
    port: u16,
}

impl CourtsideServer {
    pub fn new(data: AppData, port: u16) -> Self {
        CourtsideServer { data, port }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:{}", self.port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
            // Don't panic here - just log and let the process stay alive
            // This way Docker won't restart unless the process actually exits
        }
    }
}

pub struct AppData {
    pub storage: Arc<RwLock<Storage>>,
    pub oracle: Arc<OracleClient>,
    pub snapshots: Option<Arc<SnapshotStore>>,
}

impl AppData {
    /// Snapshot persistence runs after the commit, inside the same write
    /// guard. A failed write must not undo a mutation the caller already
    /// saw succeed, so failures are logged and swallowed.
    pub fn persist(&self, storage: &Storage) {
        if let Some(snapshots) = &self.snapshots {
            if let Err(e) = snapshots.persist(storage) {
                warn!("snapshot persist failed: {}", e);
            }
        }
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            storage: Arc::clone(&self.storage),
            oracle: Arc::clone(&self.oracle),
            snapshots: self.snapshots.as_ref().map(Arc::clone),
        }
    }
}
