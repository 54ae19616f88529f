use std::future::Future;

use tokio::net::TcpListener;

use crate::routes::router;
use crate::AppState;

/// Serve the API until `shutdown` resolves, then close the store.
///
/// In-flight requests are drained before the store is closed. The store is
/// closed even when the server exits with an error.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = state.store.clone();
    let app = router(state);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    if let Err(ref e) = result {
        tracing::error!("Server error: {}", e);
    }

    tracing::info!("HTTP server stopped, closing store...");
    store.close().await;
    tracing::info!("Graceful shutdown complete");

    result
}
