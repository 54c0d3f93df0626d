//! UI Components for the Wellmap dashboard.
//!
//! # Layout Components
//! - [`Header`] - Title bar with backend status
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`Sidebar`] - File path, submit, metric dropdown and sliders
//! - [`Slider`] - Range input with marks
//! - [`Graph`] - Title and Plotly target
//! - [`LogsPanel`] - Real-time backend logs (SSE)

mod header;
mod sidebar;
mod slider;
mod graph;
mod footer;
mod logs;

pub use header::*;
pub use sidebar::*;
pub use slider::*;
pub use graph::*;
pub use footer::*;
pub use logs::*;
