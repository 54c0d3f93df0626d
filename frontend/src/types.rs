//! Common types used across the frontend application.
//!
//! These mirror the JSON the wellmap server sends and receives.
//!
//! # Categories
//!
//! - **Control Types** - Metric options and slider descriptions
//! - **View Types** - Request and recomputed view
//! - **Log Types** - Real-time log streaming
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Control Types
// =============================================================================

/// One entry of the metric dropdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricOption {
    pub value: u8,
    pub label: String,
    /// "eur", "cost" or "delta"
    pub group: String,
}

/// A labelled tick on a slider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Static description of one slider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    pub marks: Vec<SliderMark>,
}

/// Slider state before the first submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialSliders {
    pub vmin: SliderSpec,
    pub vmax: SliderSpec,
    pub granularity: SliderSpec,
}

/// Response from `GET /api/metrics`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsResponse {
    pub metrics: Vec<MetricOption>,
    pub default_metric: u8,
    pub sliders: InitialSliders,
    pub default_file: Option<String>,
}

// =============================================================================
// View Types
// =============================================================================

/// Body of `POST /api/view`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub metric: u8,
    pub v_min: f64,
    pub v_max: f64,
    pub granularity: f64,
    pub file_path: Option<String>,
    pub submit_clicks: u32,
}

/// Slider properties pushed back by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlState {
    pub vmin_disabled: bool,
    pub vmin_value: f64,
    pub vmin_step: f64,
    pub vmax_min: f64,
    pub vmax_max: f64,
    pub vmax_step: f64,
    pub vmax_marks: Vec<SliderMark>,
}

/// Values shown under the sliders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Readouts {
    pub vmin: Option<f64>,
    pub vmax: f64,
    pub granularity: f64,
}

/// A recomputed view. The figure is handed to Plotly untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub metric: u8,
    pub title: String,
    pub figure: serde_json::Value,
    pub controls: ControlState,
    pub readouts: Readouts,
}

/// Response from `POST /api/view`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewResponse {
    /// "updated" or "noUpdate"
    pub status: String,
    #[serde(default)]
    pub view: Option<ViewModel>,
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
///
/// Matches the backend's log levels for SSE streaming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }
}

/// A single log entry from the backend.
///
/// Received via SSE from `/api/logs` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub indent: u8,
    /// Timestamp string (HH:MM:SS), local receive time when absent
    #[serde(default = "local_timestamp")]
    pub timestamp: String,
}

fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Server answered with an error body.
    Server { status: u16, message: String },
    /// Response could not be decoded.
    Decode(String),
    /// Plotly refused the figure.
    Render(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Render(msg) => write!(f, "Plot error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_response_deserialization() {
        let json = r#"{
            "status": "updated",
            "view": {
                "metric": 9,
                "title": "Delta_Vert_Hz_NoCutoff",
                "figure": {"data": [{"type": "contour"}], "layout": {"width": 1000}},
                "controls": {
                    "vminDisabled": false,
                    "vminValue": -2.0,
                    "vminStep": 0.1,
                    "vmaxMin": 0.0,
                    "vmaxMax": 10.0,
                    "vmaxStep": 0.1,
                    "vmaxMarks": [{"value": 0.0, "label": "0"}]
                },
                "readouts": {"vmin": -2.0, "vmax": 8.0, "granularity": 0.5}
            }
        }"#;

        let response: ViewResponse = serde_json::from_str(json).unwrap();
        let view = response.view.unwrap();

        assert_eq!(view.metric, 9);
        assert!(!view.controls.vmin_disabled);
        assert_eq!(view.readouts.vmin, Some(-2.0));
        assert_eq!(view.figure["layout"]["width"], 1000);
    }

    #[test]
    fn test_no_update_has_no_view() {
        let response: ViewResponse = serde_json::from_str(r#"{"status":"noUpdate"}"#).unwrap();
        assert_eq!(response.status, "noUpdate");
        assert!(response.view.is_none());
    }

    #[test]
    fn test_request_serialization() {
        let request = ViewRequest {
            metric: 1,
            v_min: 0.0,
            v_max: 120.0,
            granularity: 0.5,
            file_path: Some("data.csv".into()),
            submit_clicks: 2,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["vMax"], 120.0);
        assert_eq!(json["filePath"], "data.csv");
        assert_eq!(json["submitClicks"], 2);
    }

    #[test]
    fn test_log_entry_deserialization() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"level":"warning","message":"clamped","indent":1,"timestamp":"12:00:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.level, LogLevel::Warning);
        assert_eq!(entry.level.css_class(), "log-warning");
        assert_eq!(entry.indent, 1);
    }

    #[test]
    fn test_log_entry_without_timestamp() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"level":"info","message":"hello"}"#).unwrap();
        assert_eq!(entry.indent, 0);
        assert_eq!(entry.timestamp.len(), 8);
    }
}
