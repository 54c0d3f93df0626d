//! # Wellmap - Vertical vs horizontal well heatmaps
//!
//! Wellmap loads a reservoir sensitivity table (permeability × gross height,
//! with EUR and technical-cost outcomes for vertical and horizontal wells),
//! reshapes every outcome into a grid and describes a contour heatmap for
//! the dashboard to draw.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  ; table    │────▶│   Parser    │────▶│   Dataset   │────▶│    View     │
//! │ (ISO/UTF8)  │     │ (auto-enc)  │     │ (10 grids)  │     │  (figure)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wellmap::{load_dataset, compute_view, ViewRequest};
//!
//! let data = load_dataset("sensitivity.csv", ';')?;
//! let request = ViewRequest { v_min: -2.0, v_max: 8.0, ..ViewRequest::default() };
//! let view = compute_view(&request, &data)?;
//! println!("{}", serde_json::to_string_pretty(&view.figure)?);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Metric identifiers and groups
//! - [`parser`] - Delimited table reading with encoding detection
//! - [`dataset`] - Schema checks, records, grids
//! - [`view`] - Pure view computation and color midpoint
//! - [`config`] - Environment configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;
pub mod config;

// Parsing
pub mod parser;

// Transformation
pub mod dataset;

// View
pub mod view;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    DatasetError,
    GridError,
    SchemaError,
    ServerError,
    TableError,
    ViewError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    metric_options,
    Metric,
    MetricGroup,
    MetricOption,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_encoding,
    parse_cell,
    parse_table,
    parse_table_bytes,
    parse_table_file,
    ParseResult,
    RawRow,
    RawTable,
    DEFAULT_DELIMITER,
};

// =============================================================================
// Re-exports - Dataset
// =============================================================================

pub use dataset::{
    clamp_delta,
    load_dataset,
    transform_table,
    unit_label,
    Bounds,
    DatasetSummary,
    Grid,
    MetricGrid,
    Record,
    Schema,
    TransformedData,
    DELTA_LIMIT,
};

// =============================================================================
// Re-exports - View
// =============================================================================

pub use view::{
    compute_view,
    initial_sliders,
    rescale,
    slider_marks,
    update_view,
    ControlState,
    Figure,
    Readouts,
    SliderMark,
    ViewModel,
    ViewRequest,
    ViewUpdate,
};

// =============================================================================
// Re-exports - Config / API
// =============================================================================

pub use config::Config;

pub use api::types::{
    error_response,
    ControlsResponse,
    ViewResponse,
};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
