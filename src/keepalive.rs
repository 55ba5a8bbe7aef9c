//! Keep-alive HTTP endpoint for the hosting platform's liveness probe.

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info};

pub const ALIVE_TEXT: &str = "Meha is running!";

async fn alive() -> &'static str {
    ALIVE_TEXT
}

pub fn router() -> Router {
    Router::new().route("/", get(alive)).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::default())
            .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
    )
}

/// Serve the keep-alive endpoint on `0.0.0.0:port` until the process exits.
///
/// Failures are logged; the bot keeps running without the endpoint.
pub async fn serve(port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind keep-alive endpoint on {addr}: {e}");
            return;
        }
    };

    info!("Keep-alive endpoint listening on http://{addr}");
    if let Err(e) = axum::serve(listener, router()).await {
        error!("Keep-alive endpoint stopped: {e}");
    }
}
