//! HTTP server for the Wellmap dashboard.
//!
//! # API Endpoints
//!
//! | Method | Path           | Description                               |
//! |--------|----------------|-------------------------------------------|
//! | GET    | `/health`      | Health check                              |
//! | GET    | `/api/metrics` | Metric options and initial slider state   |
//! | POST   | `/api/view`    | Recompute the figure for the controls     |
//! | GET    | `/api/logs`    | SSE stream for real-time logs             |
//!
//! When a static directory is configured, every other path is served from it.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::logs::{log_error, LOG_BROADCASTER};
use super::types::{error_response, ControlsResponse, ViewResponse};
use crate::config::Config;
use crate::error::{DatasetError, ServerError, ServerResult, TableError, ViewError};
use crate::view::{update_view, ViewRequest};

type ApiError = (StatusCode, Json<Value>);

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let static_dir = config.static_dir.clone();

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/metrics", get(controls))
        .route("/api/view", post(view))
        .route("/api/logs", get(sse_logs))
        .with_state(config);

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app.route("/", get(health)),
    };

    app.layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: Config) -> ServerResult<()> {
    let port = config.port;
    let static_dir = config.static_dir.clone();
    let app = router(Arc::new(config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 Wellmap server running on http://localhost:{}", port);
    println!("   GET  /api/metrics - Metric options and slider defaults");
    println!("   POST /api/view    - Compute contour view");
    println!("   GET  /api/logs    - SSE log stream");
    println!("   GET  /health      - Health check");
    if let Some(dir) = static_dir {
        println!("   GET  /*           - Dashboard from {}", dir.display());
    }
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "wellmap",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "metrics": "GET /api/metrics",
            "view": "POST /api/view",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// Controls description endpoint
async fn controls(State(config): State<Arc<Config>>) -> Json<ControlsResponse> {
    Json(ControlsResponse::new(config.default_file.clone()))
}

/// View endpoint: re-reads the file on every call
async fn view(
    State(config): State<Arc<Config>>,
    payload: Result<Json<ViewRequest>, JsonRejection>,
) -> Result<Json<ViewResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|e| reject(ServerError::BadRequest(e.body_text())))?;

    let delimiter = config.delimiter;
    let update = tokio::task::spawn_blocking(move || update_view(&request, delimiter))
        .await
        .map_err(|e| reject(ServerError::Internal(e.to_string())))?
        .map_err(|e| reject(ServerError::View(e)))?;

    Ok(Json(ViewResponse::from(update)))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// HTTP status for a server error.
pub fn status_for(err: &ServerError) -> StatusCode {
    match err {
        ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ServerError::Internal(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ServerError::View(ViewError::Dataset(e)) if e.is_not_found() => StatusCode::NOT_FOUND,
        ServerError::View(ViewError::Dataset(DatasetError::Table(TableError::Io(_)))) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ServerError::View(_) => StatusCode::BAD_REQUEST,
    }
}

fn reject(err: ServerError) -> ApiError {
    log_error(err.to_string());
    (status_for(&err), Json(error_response(&err.to_string())))
}
