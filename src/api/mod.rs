//! HTTP API module for the root greeting endpoint.

pub mod handlers;
pub mod routes;

pub use handlers::GREETING;
pub use routes::create_router;

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Bind the listen socket and serve requests until `shutdown` resolves.
///
/// Binding is the one fatal startup step: an occupied or unbindable port
/// surfaces as an error here and the caller is expected to exit non-zero.
pub async fn serve<S>(config: &Config, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("sample-app listening on {}", config.port);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
