use std::net::SocketAddr;

use tokio::signal;
use tracing::info;

use crate::{create_router, AppState};

/// The critiq HTTP server
pub struct Server {
    state: AppState,
    addr: SocketAddr,
}

impl Server {
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { state, addr }
    }

    /// Serve until ctrl-c or SIGTERM, draining in-flight requests
    pub async fn run(self) -> anyhow::Result<()> {
        let router = create_router(self.state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Server listening on http://{}", self.addr);
        info!("  GET    / - Web UI");
        info!("  POST   /review - Submit code for review");
        info!("  GET    /reviews - List stored reviews");
        info!("  DELETE /review/{{id}} - Delete a stored review");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
