//! Backend and rendering services.
//!
//! # Services
//!
//! - [`view`] - Controls and view requests to the wellmap server
//! - [`plot`] - Plotly.js rendering
//!
//! # JavaScript Bindings
//!
//! `plot.js` in `src/js/` wraps the global Plotly bundle.

pub mod view;
pub mod plot;

pub use view::*;
pub use plot::*;
