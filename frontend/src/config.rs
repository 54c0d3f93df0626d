//! Application configuration.
//!
//! Centralized configuration for the Wellmap dashboard.

/// Backend API base URL.
///
/// The wellmap server computing the views.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Id of the div Plotly draws into.
pub const PLOT_ELEMENT_ID: &str = "heatmap-graph";

/// Page heading above the graph.
pub const PAGE_HEADING: &str = "Heatmap Vertical vs Horizontal Wells";
