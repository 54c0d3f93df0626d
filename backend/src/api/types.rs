//! REST API types for frontend integration.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::{metric_options, Metric, MetricOption};
use crate::view::{initial_sliders, InitialSliders, ViewModel, ViewUpdate};

/// Response to `POST /api/view`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    /// "updated" or "noUpdate"
    pub status: String,

    /// Present when `status` is "updated"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewModel>,
}

impl From<ViewUpdate> for ViewResponse {
    fn from(update: ViewUpdate) -> Self {
        match update {
            ViewUpdate::NoUpdate => ViewResponse {
                status: "noUpdate".to_string(),
                view: None,
            },
            ViewUpdate::Updated(view) => ViewResponse {
                status: "updated".to_string(),
                view: Some(*view),
            },
        }
    }
}

/// Response to `GET /api/metrics`: everything needed to draw the controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsResponse {
    pub metrics: Vec<MetricOption>,
    pub default_metric: u8,
    pub sliders: InitialSliders,
    /// Prefill for the file path box
    pub default_file: Option<String>,
}

impl ControlsResponse {
    pub fn new(default_file: Option<String>) -> Self {
        ControlsResponse {
            metrics: metric_options(),
            default_metric: Metric::DEFAULT.id(),
            sliders: initial_sliders(),
            default_file,
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_update_has_no_view() {
        let response = ViewResponse::from(ViewUpdate::NoUpdate);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "noUpdate");
        assert!(json.get("view").is_none());
    }

    #[test]
    fn test_controls_response_shape() {
        let json = serde_json::to_value(ControlsResponse::new(None)).unwrap();

        assert_eq!(json["defaultMetric"], 9);
        assert_eq!(json["metrics"].as_array().unwrap().len(), 10);
        assert_eq!(json["sliders"]["granularity"]["step"], 0.05);
        assert!(json["defaultFile"].is_null());
    }

    #[test]
    fn test_error_response() {
        let json = error_response("boom");
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
    }
}
