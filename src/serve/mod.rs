//! HTTP surface for the experience timeline.
//!
//! Serves the ordered view model as JSON for a rendering layer to
//! consume: `GET /experience` performs one upstream fetch, aggregates,
//! and responds; `GET /healthz` is a liveness probe. Upstream failures
//! map to 502, data failures to 500.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::{DataError, FetchError, Result, TenureError};
use crate::experience::view::CompanyView;
use crate::experience::{aggregate, build_views};
use crate::fetch::PositionSource;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The position data source, injected so tests can use fakes.
    pub source: Arc<dyn PositionSource>,
}

/// Builds the router with all routes attached.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/experience", get(experience))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Normalizes a `[host:]port` bind argument to `host:port`.
///
/// A bare port binds to loopback.
#[must_use]
pub fn parse_bind_addr(value: &str) -> String {
    if value.contains(':') {
        value.to_string()
    } else {
        format!("127.0.0.1:{value}")
    }
}

/// Binds the listener and serves until interrupted.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server
/// fails while running.
pub async fn serve(bind_addr: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind_addr).await.map_err(TenureError::Io)?;
    let local_addr = listener.local_addr().map_err(TenureError::Io)?;
    info!(%local_addr, "experience endpoint listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(TenureError::Io)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn experience(State(state): State<AppState>) -> std::result::Result<Json<Vec<CompanyView>>, ApiError> {
    let records = state.source.fetch_positions().await?;
    let companies = aggregate(&records)?;
    Ok(Json(build_views(&companies)))
}

/// Failure modes of the experience handler, mapped to HTTP statuses.
#[derive(Debug)]
enum ApiError {
    Upstream(FetchError),
    Data(DataError),
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        Self::Upstream(err)
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            Self::Data(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        warn!(%message, "experience request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to register Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        _ = terminate => {}
    }
    info!("shutting down");
}
