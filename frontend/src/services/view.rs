//! HTTP calls to the wellmap server.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{AppError, AppResult, ControlsResponse, ViewRequest, ViewResponse};

/// Fetch metric options and initial slider state.
pub async fn fetch_controls(backend_url: &str) -> AppResult<ControlsResponse> {
    let url = format!("{}/api/metrics", backend_url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    decode(response).await
}

/// Ask the server to recompute the view for the current controls.
pub async fn fetch_view(backend_url: &str, request: &ViewRequest) -> AppResult<ViewResponse> {
    let url = format!("{}/api/view", backend_url);
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status,
            message: error_message(&body),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Pull `error` out of a `{"status":"error","error":...}` body, or keep the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
