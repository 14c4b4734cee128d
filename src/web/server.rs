//! Axum server setup.

use std::net::SocketAddr;

use super::routes::router;

/// Run the web server
pub async fn run_server(bind: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let app = router();

    log::info!("Starting cross server on http://{}", bind);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
